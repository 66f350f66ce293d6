use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, BufRead, IsTerminal, Write};
use zeroize::Zeroizing;

/// Line-oriented interactive I/O used by the flow.
pub trait Console {
    /// Show `prompt` and read one line. The trailing newline is removed; nothing else is.
    /// EOF reads as an empty string.
    fn prompt_line(&mut self, prompt: &str) -> Result<String>;

    /// Like `prompt_line`, but typed characters are not echoed.
    fn prompt_secret(&mut self, prompt: &str) -> Result<Zeroizing<String>>;

    fn say(&mut self, text: &str) -> Result<()>;
}

/// Process stdin/stdout.
pub struct Terminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self { stdin: io::stdin(), stdout: io::stdout() }
    }

    fn show_prompt(&mut self, prompt: &str) -> Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(prompt.as_bytes()).context("writing prompt")?;
        out.flush().context("flushing stdout")?;
        Ok(())
    }

    fn read_raw_line(&mut self, buf: &mut String) -> Result<()> {
        self.stdin.lock().read_line(buf).context("reading stdin")?;
        strip_newline(buf);
        Ok(())
    }
}

impl Console for Terminal {
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        self.show_prompt(prompt)?;
        let mut line = String::new();
        self.read_raw_line(&mut line)?;
        Ok(line)
    }

    fn prompt_secret(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        self.show_prompt(prompt)?;
        let mut secret = Zeroizing::new(String::with_capacity(64));

        // Piped input is never echoed by the terminal in the first place.
        if !self.stdin.is_terminal() {
            self.read_raw_line(&mut secret)?;
            return Ok(secret);
        }

        read_hidden(&mut secret)?;
        self.say("")?;
        Ok(secret)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.stdout.lock(), "{text}").context("writing stdout")?;
        Ok(())
    }
}

/// Restores cooked mode on every exit path.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("enabling raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn read_hidden(secret: &mut String) -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    loop {
        if let Event::Key(k) = event::read().context("reading key event")? {
            if let Some(done) = apply_key(secret, k) {
                return done;
            }
        }
    }
}

/// One key of hidden input. `None` means keep reading.
fn apply_key(secret: &mut String, k: KeyEvent) -> Option<Result<()>> {
    if k.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    match k.code {
        KeyCode::Enter => return Some(Ok(())),
        KeyCode::Char('c' | 'C') if ctrl => return Some(Err(anyhow!("interrupted"))),
        KeyCode::Backspace => {
            secret.pop();
        }
        KeyCode::Char(c) if !ctrl => secret.push(c),
        _ => {}
    }
    None
}

fn strip_newline(s: &mut String) {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Answers prompts from a queue and keeps a transcript of everything shown.
    #[derive(Default)]
    pub struct ScriptedConsole {
        answers: VecDeque<String>,
        pub prompts: Vec<String>,
        pub secret_prompts: Vec<String>,
        pub transcript: String,
    }

    impl ScriptedConsole {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self { answers: answers.into_iter().map(Into::into).collect(), ..Default::default() }
        }

        fn next_answer(&mut self) -> String {
            self.answers.pop_front().unwrap_or_default()
        }
    }

    impl Console for ScriptedConsole {
        fn prompt_line(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            self.transcript.push_str(prompt);
            let answer = self.next_answer();
            self.transcript.push_str(&answer);
            self.transcript.push('\n');
            Ok(answer)
        }

        fn prompt_secret(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
            self.secret_prompts.push(prompt.to_string());
            self.transcript.push_str(prompt);
            self.transcript.push('\n');
            Ok(Zeroizing::new(self.next_answer()))
        }

        fn say(&mut self, text: &str) -> Result<()> {
            self.transcript.push_str(text);
            self.transcript.push('\n');
            Ok(())
        }
    }
}
