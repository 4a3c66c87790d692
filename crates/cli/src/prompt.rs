//! Line-oriented operator input with validation and re-prompting.

use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended (Ctrl-D) while a prompt was waiting.
    #[error("input cancelled")]
    Cancelled,

    /// The answer line was not valid UTF-8.
    #[error("input is not valid UTF-8 text")]
    InvalidText,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Reads answers from `input`, writes prompts and complaints to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `message` and return the trimmed answer (possibly empty).
    pub fn ask(&mut self, message: &str) -> PromptResult<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }
        let line = String::from_utf8(line).map_err(|_| PromptError::InvalidText)?;
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is non-empty.
    pub fn required_text(&mut self, message: &str) -> PromptResult<String> {
        loop {
            let answer = self.ask(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "Error: Este campo no puede estar vacío.")?;
        }
    }

    /// Ask until the answer is an integer >= 0.
    pub fn non_negative_integer(&mut self, message: &str) -> PromptResult<i64> {
        loop {
            let answer = self.ask(message)?;
            if answer.is_empty() {
                writeln!(self.output, "Error: El valor no puede estar vacío.")?;
                continue;
            }
            match answer.parse::<i64>() {
                Ok(n) if n < 0 => writeln!(self.output, "Error: El número debe ser no negativo.")?,
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Error: Ingresa un entero válido.")?,
            }
        }
    }

    /// Ask until the answer is a finite number >= 0.
    pub fn non_negative_decimal(&mut self, message: &str) -> PromptResult<f64> {
        loop {
            let answer = self.ask(message)?;
            if answer.is_empty() {
                writeln!(self.output, "Error: El valor no puede estar vacío.")?;
                continue;
            }
            match answer.parse::<f64>() {
                Ok(n) if !n.is_finite() => {
                    writeln!(self.output, "Error: Ingresa un número decimal válido.")?
                }
                Ok(n) if n < 0.0 => writeln!(self.output, "Error: El número debe ser no negativo.")?,
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Error: Ingresa un número decimal válido.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn ask_trims_and_detects_end_of_input() {
        let mut p = prompter("  Cacao \n");
        assert_eq!(p.ask("Nombre: ").unwrap(), "Cacao");
        assert!(matches!(p.ask("Nombre: "), Err(PromptError::Cancelled)));
    }

    #[test]
    fn required_text_reprompts_on_blank() {
        let mut p = prompter("\n   \nAguaje\n");
        assert_eq!(p.required_text("Nombre: ").unwrap(), "Aguaje");
        let out = output(p);
        assert_eq!(out.matches("Nombre: ").count(), 3);
        assert_eq!(out.matches("no puede estar vacío").count(), 2);
    }

    #[test]
    fn integer_prompt_rejects_bad_input_until_valid() {
        let mut p = prompter("\ndiez\n-4\n2.5\n10\n");
        assert_eq!(p.non_negative_integer("Cantidad: ").unwrap(), 10);
        let out = output(p);
        assert!(out.contains("El valor no puede estar vacío"));
        assert!(out.contains("Ingresa un entero válido"));
        assert!(out.contains("debe ser no negativo"));
    }

    #[test]
    fn decimal_prompt_rejects_negative_and_infinite() {
        let mut p = prompter("-1\ninf\n3.75\n");
        assert_eq!(p.non_negative_decimal("Precio: ").unwrap(), 3.75);
        let out = output(p);
        assert!(out.contains("debe ser no negativo"));
        assert!(out.contains("Ingresa un número decimal válido"));
    }

    #[test]
    fn non_utf8_answer_is_rejected_without_losing_the_stream() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\nAguaje\n".to_vec()), Vec::new());
        assert!(matches!(p.ask("Nombre: "), Err(PromptError::InvalidText)));
        assert_eq!(p.ask("Nombre: ").unwrap(), "Aguaje");
    }

    #[test]
    fn end_of_input_cancels_a_retry_loop() {
        let mut p = prompter("abc\n");
        assert!(matches!(
            p.non_negative_integer("Cantidad: "),
            Err(PromptError::Cancelled)
        ));
    }
}
