//! Interactive shell over a line-oriented input.
//!
//! One command per line. Destructive commands ask for `y/N` on the same
//! input. Application errors are printed and the shell keeps going; only I/O
//! failures end it.

use std::io::{BufRead, Write};

use anyhow::Result;
use certify_admin::{CertificateDraft, DeleteOutcome, DestructiveAction, UniversityDraft};
use certify_app::{App, AppError, Text};
use certify_store::{CertificateStore, UniversityStore};
use certify_types::{CertificateId, ExternalToolError, QrScanner, ScanHandle, UniversityId};

use crate::render;

const HELP: &str = "\
commands:
  verify <id>                  look up a certificate
  scan <payload>               verify a payload decoded from a QR code
  details                      show the last verified certificate
  universities | certificates  list records
  login [username]             log in as administrator
  logout                       log out (asks for confirmation)
  add-university               add a university
  update-university <id>       edit a university
  delete-university <id>       delete a university and its certificates
  add-certificate              issue a certificate
  update-certificate <id>      edit a certificate
  delete-certificate <id>      delete a certificate
  stats                        dashboard counters and certificate table
  logs                         verification log, newest first
  lang                         switch between English and Arabic
  help                         this text
  quit                         leave the shell";

/// Scanner for payloads typed at the shell: sessions are bookkeeping only.
#[derive(Default)]
pub struct TypedScanner {
    next: u64,
}

impl QrScanner for TypedScanner {
    fn start(&mut self) -> Result<ScanHandle, ExternalToolError> {
        self.next += 1;
        Ok(ScanHandle(self.next))
    }

    fn stop(&mut self, _handle: ScanHandle) -> Result<(), ExternalToolError> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    app: App,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: App, input: R, out: W) -> Self {
        Self { app, input, out }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "certify shell; type `help` for commands")?;
        loop {
            let prompt = match self.app.session().username() {
                Some(name) => format!("{name}@certify> "),
                None => "certify> ".to_string(),
            };
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };
            if self.execute(&line).await? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    async fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "help" => writeln!(self.out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            "verify" => match self.app.verify(rest).await {
                Ok(_) => self.details()?,
                Err(e) => self.fail(&e)?,
            },
            "scan" => self.scan(rest).await?,
            "details" => self.details()?,
            "universities" => {
                let universities = self.app.records().list_universities();
                render::universities(&mut self.out, &universities)?
            }
            "certificates" => {
                let certificates = self.app.records().list_certificates();
                render::certificates(&mut self.out, &certificates)?
            }
            "login" => self.login(rest)?,
            "logout" => self.logout()?,
            "add-university" => self.add_university()?,
            "update-university" => self.update_university(rest)?,
            "delete-university" => self.delete_university(rest)?,
            "add-certificate" => self.add_certificate()?,
            "update-certificate" => self.update_certificate(rest)?,
            "delete-certificate" => self.delete_certificate(rest)?,
            "stats" | "logs" => match self.app.dashboard() {
                Ok(dash) if command == "stats" => {
                    render::stats(&mut self.out, &dash, self.app.locale())?
                }
                Ok(dash) => render::logs(&mut self.out, &dash, self.app.locale())?,
                Err(e) => self.fail(&e)?,
            },
            "lang" => {
                let locale = self.app.toggle_locale();
                writeln!(self.out, "{locale} ({:?})", locale.direction())?;
            }
            other => writeln!(self.out, "unknown command `{other}`; try `help`")?,
        }
        Ok(Flow::Continue)
    }

    // ── Verification ───────────────────────────────────────────────────

    async fn scan(&mut self, payload: &str) -> Result<()> {
        let handle = match self.app.start_scan() {
            Ok(handle) => handle,
            Err(e) => return self.fail(&e),
        };
        match self.app.scan_decoded(handle, payload).await {
            Ok(Some(_)) => self.details(),
            Ok(None) => Ok(()),
            Err(e) => self.fail(&e),
        }
    }

    fn details(&mut self) -> Result<()> {
        let locale = self.app.locale();
        match self.app.details() {
            Some(view) => render::view(&mut self.out, &view, locale)?,
            None => writeln!(
                self.out,
                "{} {}",
                locale.text(Text::FailedTitle),
                locale.text(Text::FailedSubtitle)
            )?,
        }
        Ok(())
    }

    // ── Session ────────────────────────────────────────────────────────

    fn login(&mut self, username: &str) -> Result<()> {
        let username = if username.is_empty() {
            self.ask("username", None)?
        } else {
            username.to_string()
        };
        let password = self.ask("password", None)?;
        match self.app.login(&username, &password) {
            Ok(()) => writeln!(self.out, "{}", self.app.locale().welcome(&username))?,
            Err(e) => self.fail(&e)?,
        }
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        let Self { app, input, out } = self;
        let mut confirm = |action: &DestructiveAction| confirm_on(input, out, action);
        if app.logout(&mut confirm) {
            writeln!(self.out, "logged out")?;
        }
        Ok(())
    }

    // ── Universities ───────────────────────────────────────────────────

    fn add_university(&mut self) -> Result<()> {
        let draft = self.university_form(UniversityDraft::default())?;
        match self.app.add_university(&draft) {
            Ok(u) => writeln!(self.out, "added university {}", u.id)?,
            Err(e) => self.fail(&e)?,
        }
        Ok(())
    }

    fn update_university(&mut self, id: &str) -> Result<()> {
        let id = UniversityId::new(id);
        let Some(existing) = self.app.records().get_university(&id) else {
            writeln!(self.out, "no university {id}")?;
            return Ok(());
        };
        let draft = self.university_form(UniversityDraft::from_university(&existing))?;
        match self.app.update_university(&id, &draft) {
            Ok(u) => writeln!(self.out, "updated university {}", u.id)?,
            Err(e) => self.fail(&e)?,
        }
        Ok(())
    }

    fn delete_university(&mut self, id: &str) -> Result<()> {
        let id = UniversityId::new(id);
        let Self { app, input, out } = self;
        let mut confirm = |action: &DestructiveAction| confirm_on(input, out, action);
        let result = app.delete_university(&id, &mut confirm);
        self.report_delete(result)
    }

    fn university_form(&mut self, current: UniversityDraft) -> Result<UniversityDraft> {
        Ok(UniversityDraft {
            name: self.ask("name", Some(&current.name))?,
            country: self.ask("country", Some(&current.country))?,
        })
    }

    // ── Certificates ───────────────────────────────────────────────────

    fn add_certificate(&mut self) -> Result<()> {
        let draft = self.certificate_form(CertificateDraft::default())?;
        match self.app.add_certificate(&draft) {
            Ok(c) => writeln!(self.out, "issued certificate {}", c.id)?,
            Err(e) => self.fail(&e)?,
        }
        Ok(())
    }

    fn update_certificate(&mut self, id: &str) -> Result<()> {
        let Some(existing) = self.app.records().get_certificate(id) else {
            writeln!(self.out, "no certificate {id}")?;
            return Ok(());
        };
        let draft = self.certificate_form(CertificateDraft::from_certificate(&existing))?;
        match self.app.update_certificate(&existing.id, &draft) {
            Ok(c) => writeln!(self.out, "updated certificate {}", c.id)?,
            Err(e) => self.fail(&e)?,
        }
        Ok(())
    }

    fn delete_certificate(&mut self, id: &str) -> Result<()> {
        let id = self
            .app
            .records()
            .get_certificate(id)
            .map(|c| c.id)
            .unwrap_or_else(|| CertificateId::new(id));
        let Self { app, input, out } = self;
        let mut confirm = |action: &DestructiveAction| confirm_on(input, out, action);
        let result = app.delete_certificate(&id, &mut confirm);
        self.report_delete(result)
    }

    fn certificate_form(&mut self, current: CertificateDraft) -> Result<CertificateDraft> {
        Ok(CertificateDraft {
            student_name: self.ask("student name", Some(&current.student_name))?,
            university_id: self.ask("university id", Some(&current.university_id))?,
            degree: self.ask("degree", Some(&current.degree))?,
            major: self.ask("major", Some(&current.major))?,
            graduation_date: self.ask(
                "graduation date (YYYY-MM-DD)",
                Some(&current.graduation_date),
            )?,
        })
    }

    // ── Helpers ────────────────────────────────────────────────────────

    fn report_delete(&mut self, result: Result<DeleteOutcome, AppError>) -> Result<()> {
        match result {
            Ok(DeleteOutcome::Cancelled) => {
                writeln!(self.out, "{}", self.app.locale().text(Text::Cancelled))?
            }
            Ok(DeleteOutcome::Deleted { cascaded }) if cascaded.is_empty() => {
                writeln!(self.out, "deleted")?
            }
            Ok(DeleteOutcome::Deleted { cascaded }) => {
                writeln!(self.out, "deleted, with {} certificate(s)", cascaded.len())?
            }
            Err(e) => self.fail(&e)?,
        }
        Ok(())
    }

    fn fail(&mut self, err: &AppError) -> Result<()> {
        writeln!(self.out, "{}", render::describe(err, self.app.locale()))?;
        Ok(())
    }

    /// Prompt for one field. An empty answer keeps `current` when given.
    fn ask(&mut self, label: &str, current: Option<&str>) -> Result<String> {
        match current {
            Some(current) if !current.is_empty() => write!(self.out, "{label} [{current}]: ")?,
            _ => write!(self.out, "{label}: ")?,
        }
        self.out.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        let answer = answer.trim_end_matches(['\r', '\n']);
        Ok(match current {
            Some(current) if answer.is_empty() => current.to_string(),
            _ => answer.to_string(),
        })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Ask `action`'s question and read a `y/N` answer. Anything but yes declines.
fn confirm_on(input: &mut impl BufRead, out: &mut impl Write, action: &DestructiveAction) -> bool {
    if write!(out, "{action} [y/N] ").and_then(|_| out.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
