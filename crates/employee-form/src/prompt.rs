//! Line-oriented terminal front end for the form.

use std::io::{self, BufRead, Write};

use domain::{parse_date, DEPARTMENTS};

use crate::client::EmployeeClient;
use crate::error::FormError;
use crate::form::{EmployeeForm, Field, Notice, SubmitOutcome};

/// Interactive session over any input/output pair.
pub struct FormSession<R, W> {
    input: R,
    output: W,
    form: EmployeeForm,
}

impl<R: BufRead, W: Write> FormSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            form: EmployeeForm::new(),
        }
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    /// Consume the session, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `q` or end of input.
    pub async fn run(&mut self, client: &dyn EmployeeClient) -> io::Result<()> {
        loop {
            self.render()?;

            let Some(line) = self.read_line("> ")? else {
                break;
            };

            match line.as_str() {
                "" => continue,
                "q" => break,
                "r" => self.form.reset(),
                "s" => {
                    if self.form.submit(client).await == SubmitOutcome::Invalid {
                        writeln!(self.output, "Please fix the highlighted fields.")?;
                    }
                }
                other => match other.parse::<usize>() {
                    Ok(n) if (1..=Field::ALL.len()).contains(&n) => self.edit(Field::ALL[n - 1])?,
                    _ => writeln!(self.output, "Unknown command: {}", other)?,
                },
            }
        }

        Ok(())
    }

    fn edit(&mut self, field: Field) -> io::Result<()> {
        match field {
            Field::Department => {
                for (i, department) in DEPARTMENTS.iter().enumerate() {
                    writeln!(self.output, "  {}) {}", i + 1, department)?;
                }
                let Some(choice) = self.read_line("Select Department: ")? else {
                    return Ok(());
                };
                let picked = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .map(|index| self.form.select_department(index));
                if !matches!(picked, Some(Ok(()))) {
                    writeln!(self.output, "Enter a number from 1 to {}", DEPARTMENTS.len())?;
                }
            }
            Field::DateOfJoining => {
                let Some(value) = self.read_line("Date of Joining (YYYY-MM-DD): ")? else {
                    return Ok(());
                };
                let result = match parse_date(&value) {
                    Some(date) => self.form.pick_date(date),
                    None => Err(FormError::InvalidDate(value)),
                };
                if let Err(e) = result {
                    writeln!(self.output, "{}", e)?;
                }
            }
            _ => {
                let prompt = format!("{}: ", field.label());
                if let Some(value) = self.read_line(&prompt)? {
                    self.form.set(field, value);
                }
            }
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Add Employee")?;

        for (i, field) in Field::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {:<16} {}",
                i + 1,
                field.label(),
                self.form.value(*field)
            )?;
            if let Some(message) = self.form.error_for(*field) {
                writeln!(self.output, "     ! {}", message)?;
            }
        }

        match self.form.notice() {
            Some(Notice::Success(message)) => writeln!(self.output, "{}", message)?,
            Some(Notice::Error(message)) => writeln!(self.output, "Error: {}", message)?,
            None => {}
        }

        writeln!(
            self.output,
            "[1-{}] edit field  [s] submit  [r] reset  [q] quit",
            Field::ALL.len()
        )?;
        self.output.flush()
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
