use crate::core::cursor::StageCursor;
use crate::core::journey::{fun_fact, phase_label, progress_dots, progress_percent};
use crate::utils::error::{Result, SiteError};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerCommand {
    Next,
    Previous,
    /// Zero-based target.
    Jump(usize),
    Reset,
    Quit,
}

impl ExplorerCommand {
    /// Parses one line of input. Stage numbers are 1-based on the wire.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "n" | "next" | "" => Ok(ExplorerCommand::Next),
            "p" | "prev" | "previous" => Ok(ExplorerCommand::Previous),
            "r" | "reset" => Ok(ExplorerCommand::Reset),
            "q" | "quit" | "exit" => Ok(ExplorerCommand::Quit),
            other => match other.parse::<usize>() {
                Ok(0) => Err("stages are numbered from 1".to_string()),
                Ok(n) => Ok(ExplorerCommand::Jump(n - 1)),
                Err(_) => Err(format!("unknown command '{}'", line)),
            },
        }
    }
}

/// Terminal rendition of the journey page's stage stepper: one view session
/// driven by line commands.
pub struct JourneyExplorer {
    cursor: StageCursor,
}

impl JourneyExplorer {
    pub fn new(cursor: StageCursor) -> Self {
        Self { cursor }
    }

    pub fn cursor(&self) -> &StageCursor {
        &self.cursor
    }

    pub fn apply(&mut self, command: ExplorerCommand) -> Result<()> {
        match command {
            ExplorerCommand::Next => {
                self.cursor.advance();
            }
            ExplorerCommand::Previous => {
                self.cursor.retreat();
            }
            ExplorerCommand::Jump(target) => {
                self.cursor.jump_to(target)?;
            }
            ExplorerCommand::Reset => {
                self.cursor.reset();
            }
            ExplorerCommand::Quit => {}
        }
        tracing::debug!("Explorer at stage {}", self.cursor.index());
        Ok(())
    }

    /// Reads commands until `quit` or end of input. Returns the final index.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<usize> {
        self.show(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let command = match ExplorerCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(output, "⚠️  {} (n, p, r, q or a stage number)", message)?;
                    continue;
                }
            };

            if command == ExplorerCommand::Quit {
                break;
            }

            match self.apply(command) {
                Ok(()) => self.show(&mut output)?,
                Err(e @ SiteError::OutOfRangeError { .. }) => {
                    writeln!(output, "⚠️  {}. {}", e, e.recovery_suggestion())?;
                }
                Err(e) => return Err(e),
            }
        }

        output.flush()?;
        Ok(self.cursor.index())
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<()> {
        let stage = self.cursor.current();
        let index = self.cursor.index();
        let len = self.cursor.len();

        let dots: String = progress_dots(&self.cursor)
            .into_iter()
            .map(|reached| if reached { '●' } else { '○' })
            .collect();

        writeln!(output)?;
        writeln!(
            output,
            "{}  {}  {}%",
            phase_label(index, len),
            dots,
            progress_percent(index, len)
        )?;
        writeln!(output, "{} {} ({})", stage.icon, stage.title, stage.subtitle)?;
        writeln!(output, "⏱️  {}", stage.duration_label)?;
        writeln!(output, "{}", stage.description)?;
        writeln!(output, "Did you know? {}", fun_fact(stage))?;
        write!(output, "[n]ext [p]rev [r]eset [q]uit or 1-{} > ", len)?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ExplorerCommand::parse("n"), Ok(ExplorerCommand::Next));
        assert_eq!(ExplorerCommand::parse(" Prev "), Ok(ExplorerCommand::Previous));
        assert_eq!(ExplorerCommand::parse("3"), Ok(ExplorerCommand::Jump(2)));
        assert_eq!(ExplorerCommand::parse("q"), Ok(ExplorerCommand::Quit));
        assert!(ExplorerCommand::parse("0").is_err());
        assert!(ExplorerCommand::parse("-1").is_err());
        assert!(ExplorerCommand::parse("fly").is_err());
    }
}
