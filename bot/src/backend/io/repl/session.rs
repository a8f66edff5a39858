//! The read-eval-print loop.
//!
//! A session is RUNNING until `close`/`exit`, end of input, or the
//! interrupt future resolves; then it says goodbye and returns. Nothing is
//! saved on the way out.

use anyhow::{Context, Result};
use log::info;
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::dispatch::{dispatch, Outcome};
use super::handlers::Reply;
use super::palette::{Palette, Tone};
use crate::backend::domain::AddressBook;
use crate::config::BotConfig;

pub struct Session {
    book: AddressBook,
    config: BotConfig,
    palette: Palette,
}

impl Session {
    pub fn new(config: BotConfig) -> Self {
        let palette = Palette::new(config.use_color);
        Self {
            book: AddressBook::new(),
            config,
            palette,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle a single line without any terminal I/O.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        dispatch(line, &mut self.book)
    }

    pub fn render(&self, reply: &Reply) -> String {
        self.palette.paint(reply.tone, &reply.text)
    }

    /// Run until the user leaves, input ends, or `interrupt` resolves.
    ///
    /// Only I/O failures are returned; command failures are printed and the
    /// loop goes on.
    pub async fn run<R, W, I>(&mut self, input: R, output: &mut W, interrupt: I) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        I: Future<Output = std::io::Result<()>>,
    {
        let mut lines = input.lines();
        tokio::pin!(interrupt);

        writeln!(output, "{}", self.palette.paint(Tone::Neutral, &self.config.greeting))?;

        loop {
            write!(output, "{}", self.palette.prompt(&self.config.prompt))?;
            output.flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read input")?,
                signal = &mut interrupt => {
                    signal.context("Failed to listen for interrupt")?;
                    info!("Interrupted, leaving");
                    writeln!(output)?;
                    return self.say_goodbye(output);
                }
            };

            let Some(line) = line else {
                info!("End of input, leaving");
                writeln!(output)?;
                return self.say_goodbye(output);
            };

            match self.handle_line(&line) {
                Outcome::Continue(Some(reply)) => writeln!(output, "{}", self.render(&reply))?,
                Outcome::Continue(None) => {}
                Outcome::Exit => return self.say_goodbye(output),
            }
        }
    }

    fn say_goodbye<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.palette.paint(Tone::Farewell, &self.config.farewell))?;
        output.flush()?;
        Ok(())
    }
}
