//! Drives the synchronizer for one CLI invocation.

use std::io::Write;
use std::process::ExitCode;

use pstore_core::{
    sort_records, Command, CredentialStore, Event, FileApi, FileListSynchronizer, FileRecord,
    SortDirection,
};

use crate::cli::CliCommand;
use crate::render::render_rows;

/// How an invocation ended, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
    LoginRequired,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
            Outcome::LoginRequired => ExitCode::from(2),
        }
    }
}

/// Runs `command`, writing results to `out` and notices to `err`.
pub async fn run<A: FileApi, S: CredentialStore>(
    sync: &mut FileListSynchronizer<A, S>,
    command: CliCommand,
    login_url: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<Outcome> {
    match command {
        CliCommand::List { search, sort, desc } => {
            let event = sync.handle(Command::Refresh).await;
            if let Some(outcome) = report_failure(&event, login_url, err)? {
                return Ok(outcome);
            }
            if let Some(term) = search {
                sync.handle(Command::Search(term)).await;
            }

            let visible = sync.store().visible();
            let ordered = match sort {
                Some(field) => {
                    let direction = if desc {
                        SortDirection::Descending
                    } else {
                        SortDirection::Ascending
                    };
                    sort_records(&visible, field.into(), direction)
                }
                None => visible,
            };
            let rows: Vec<_> = ordered.into_iter().map(FileRecord::to_row).collect();
            render_rows(out, &rows)?;
            Ok(Outcome::Success)
        }
        CliCommand::Delete { id } => {
            let event = sync.handle(Command::Refresh).await;
            if let Some(outcome) = report_failure(&event, login_url, err)? {
                return Ok(outcome);
            }
            let event = sync.handle(Command::Delete(id)).await;
            match event {
                Event::FileRemoved { id } => {
                    writeln!(out, "Deleted {id}")?;
                    Ok(Outcome::Success)
                }
                Event::FileNotFound { id } => {
                    writeln!(out, "Deleted {id} (it was not in the listing)")?;
                    Ok(Outcome::Success)
                }
                other => Ok(report_failure(&other, login_url, err)?.unwrap_or(Outcome::Failed)),
            }
        }
        CliCommand::Login { token } => match sync.handle(Command::Login(token)).await {
            Event::LoggedIn => {
                writeln!(out, "Logged in")?;
                Ok(Outcome::Success)
            }
            other => Ok(report_failure(&other, login_url, err)?.unwrap_or(Outcome::Failed)),
        },
        CliCommand::Logout => {
            writeln!(out, "Logging out...")?;
            out.flush()?;
            let event = sync.handle(Command::Logout).await;
            report_failure(&event, login_url, err)?;
            Ok(Outcome::Success)
        }
    }
}

/// Prints the notice for a failure event. Returns `None` if `event` is
/// not a failure.
fn report_failure(
    event: &Event,
    login_url: &str,
    err: &mut impl Write,
) -> std::io::Result<Option<Outcome>> {
    let outcome = match event {
        Event::RedirectToLogin => {
            writeln!(err, "Please log in at {login_url}, then run `pstore login <TOKEN>`")?;
            Outcome::LoginRequired
        }
        Event::FetchFailed { message } | Event::LoginFailed { message } => {
            writeln!(err, "{message}")?;
            Outcome::Failed
        }
        Event::DeleteFailed { id, message } => {
            writeln!(err, "{message}: {id}")?;
            Outcome::Failed
        }
        _ => return Ok(None),
    };
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use pstore_core::{ApiError, MemoryCredentialStore, SessionGuard};

    use crate::cli::SortArg;

    const LOGIN_URL: &str = "https://example.test/login";

    struct StaticApi {
        records: Result<Vec<FileRecord>, ApiError>,
    }

    #[async_trait]
    impl FileApi for StaticApi {
        async fn list_files(&self, _token: &str) -> Result<Vec<FileRecord>, ApiError> {
            self.records.clone()
        }

        async fn delete_file(&self, _token: &str, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn sync_for(
        records: Result<Vec<FileRecord>, ApiError>,
        token: Option<&str>,
    ) -> FileListSynchronizer<StaticApi, MemoryCredentialStore> {
        let store = match token {
            Some(t) => MemoryCredentialStore::with_token(t),
            None => MemoryCredentialStore::new(),
        };
        let guard = SessionGuard::new(Arc::new(store), Duration::from_secs(3));
        FileListSynchronizer::new(Arc::new(StaticApi { records }), guard)
    }

    fn sample() -> Vec<FileRecord> {
        vec![
            FileRecord::new("a", "Report.pdf", 2048, "application/pdf", None, ""),
            FileRecord::new("b", "notes.txt", 10, "text/plain", None, ""),
        ]
    }

    async fn run_capture(
        sync: &mut FileListSynchronizer<StaticApi, MemoryCredentialStore>,
        command: CliCommand,
    ) -> (Outcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = run(sync, command, LOGIN_URL, &mut out, &mut err)
            .await
            .unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[tokio::test]
    async fn list_without_token_requires_login() {
        let mut sync = sync_for(Ok(sample()), None);

        let (outcome, out, err) = run_capture(
            &mut sync,
            CliCommand::List { search: None, sort: None, desc: false },
        )
        .await;

        assert_eq!(outcome, Outcome::LoginRequired);
        assert!(out.is_empty());
        assert!(err.contains(LOGIN_URL));
    }

    #[tokio::test]
    async fn list_with_search_shows_matches() {
        let mut sync = sync_for(Ok(sample()), Some("tok"));

        let (outcome, out, _) = run_capture(
            &mut sync,
            CliCommand::List { search: Some("REPORT".into()), sort: None, desc: false },
        )
        .await;

        assert_eq!(outcome, Outcome::Success);
        assert!(out.contains("Report.pdf"));
        assert!(out.contains("2 KB"));
        assert!(!out.contains("notes.txt"));
    }

    #[tokio::test]
    async fn list_sorted_by_size() {
        let mut sync = sync_for(Ok(sample()), Some("tok"));

        let (_, out, _) = run_capture(
            &mut sync,
            CliCommand::List { search: None, sort: Some(SortArg::Size), desc: false },
        )
        .await;

        let notes = out.find("notes.txt").unwrap();
        let report = out.find("Report.pdf").unwrap();
        assert!(notes < report);
    }

    #[tokio::test]
    async fn list_empty_shows_empty_state() {
        let mut sync = sync_for(Ok(vec![]), Some("tok"));
        let (_, out, _) = run_capture(
            &mut sync,
            CliCommand::List { search: None, sort: None, desc: false },
        )
        .await;
        assert_eq!(out, "No files yet\n");
    }

    #[tokio::test]
    async fn list_transport_failure_reports_generic_message() {
        let mut sync = sync_for(Err(ApiError::Transport("boom".into())), Some("tok"));

        let (outcome, _, err) = run_capture(
            &mut sync,
            CliCommand::List { search: None, sort: None, desc: false },
        )
        .await;

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(err.trim(), "Failed to fetch files");
    }

    #[tokio::test]
    async fn delete_reports_removed_id() {
        let mut sync = sync_for(Ok(sample()), Some("tok"));

        let (outcome, out, _) = run_capture(&mut sync, CliCommand::Delete { id: "a".into() }).await;

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out.trim(), "Deleted a");
        assert_eq!(sync.store().len(), 1);
    }

    #[tokio::test]
    async fn login_rejects_blank_token() {
        let mut sync = sync_for(Ok(vec![]), None);
        let (outcome, _, err) =
            run_capture(&mut sync, CliCommand::Login { token: " ".into() }).await;
        assert_eq!(outcome, Outcome::Failed);
        assert!(err.contains("invalid token"));
    }

    #[tokio::test(start_paused = true)]
    async fn logout_clears_token() {
        let mut sync = sync_for(Ok(vec![]), Some("tok"));

        let (outcome, out, err) = run_capture(&mut sync, CliCommand::Logout).await;

        assert_eq!(outcome, Outcome::Success);
        assert!(out.starts_with("Logging out"));
        assert!(err.contains(LOGIN_URL));
        assert!(!sync.guard().is_authenticated());
    }
}
