use crate::utils::error::Result;
use std::io::Write;

const PASS: &str = "✓";
const FAIL: &str = "✗";

/// Human-readable pass/fail report shared by every check.
///
/// Sections are separated by a blank line, so the very first header is
/// printed flush with the top of the output.
pub struct Reporter<W: Write> {
    out: W,
    sections: usize,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, sections: 0 }
    }

    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        self.sections += 1;
        writeln!(self.out, "=== {} ===", title)?;
        Ok(())
    }

    pub fn pass(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{} {}", PASS, message)?;
        Ok(())
    }

    pub fn fail(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{} {}", FAIL, message)?;
        Ok(())
    }

    pub fn detail(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "  {}", message)?;
        Ok(())
    }

    /// Final summary line, preceded by a blank line.
    pub fn banner(&mut self, all_passed: bool) -> Result<()> {
        writeln!(self.out)?;
        if all_passed {
            self.pass("All configuration files are valid")?;
        } else {
            self.fail("Configuration validation failed")?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
