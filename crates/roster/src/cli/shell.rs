//! Interactive shell.
//!
//! Each input line is split into words and parsed with the same clap
//! definition as the command line, then run against one long-lived [`App`].

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::{Cli, Commands, execute};
use crate::app::App;
use crate::output::{self, OutputConfig, OutputMode};

const PROMPT: &str = "roster> ";

/// Read and run commands from `input` until `exit`, `quit` or end of input.
///
/// Errors from individual commands are reported and the session goes on.
pub(crate) async fn run(
    app: &mut App,
    output_mode: OutputMode,
    input: &mut dyn BufRead,
) -> Result<()> {
    tracing::debug!("starting interactive shell");

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let words = match split_line(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("{} {e}", output::error("Error:", &OutputConfig::from_env()));
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => continue,
            Some("exit" | "quit") => break,
            Some(_) => {}
        }

        let cli = match Cli::try_parse_from(std::iter::once("roster".to_string()).chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // Help and version requests also arrive here
                if let Err(print_err) = e.print() {
                    tracing::warn!(error = %print_err, "failed to print usage");
                }
                continue;
            }
        };

        if cli.config.is_some() {
            tracing::warn!("--config is ignored inside the shell");
        }

        let line_mode = if cli.json {
            OutputMode::Json
        } else {
            output_mode
        };

        let Some(command) = cli.command else {
            continue;
        };

        if matches!(command, Commands::Shell) {
            eprintln!("Already in an interactive shell");
            continue;
        }

        if let Err(e) = execute::run(app, &command, line_mode, input).await {
            eprintln!("{} {e:#}", output::error("Error:", &OutputConfig::from_env()));
        }
    }

    tracing::debug!("interactive shell finished");
    Ok(())
}

/// Split a line into words, honouring quotes and backslash escapes.
///
/// Single quotes take everything literally; inside double quotes a
/// backslash escapes the next character. Adjacent quoted and unquoted
/// pieces join into one word.
///
/// # Errors
///
/// Returns a message for an unterminated quote or a trailing backslash.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err("unterminated single quote".to_string()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c) => current.push(c),
                            None => return Err("unterminated double quote".to_string()),
                        },
                        Some(c) => current.push(c),
                        None => return Err("unterminated double quote".to_string()),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(c) => current.push(c),
                    None => return Err("trailing backslash".to_string()),
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterConfig;
    use crate::domain::{EmployeeId, PageRequest, SearchCriteria};
    use rstest::rstest;
    use std::io::Cursor;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case::plain("list --page 2", &["list", "--page", "2"])]
    #[case::extra_space("  show   7 \n", &["show", "7"])]
    #[case::double_quotes(r#"list --status "All Status""#, &["list", "--status", "All Status"])]
    #[case::single_quotes("list --name 'Mary Jane'", &["list", "--name", "Mary Jane"])]
    #[case::escaped_space(r"list --name Mary\ Jane", &["list", "--name", "Mary Jane"])]
    #[case::escaped_quote(r#"add -D "say \"hi\"""#, &["add", "-D", "say \"hi\""])]
    #[case::joined(r#"a"b c"d"#, &["ab cd"])]
    #[case::empty_quotes(r#"list --name """#, &["list", "--name", ""])]
    #[case::blank("   ", &[])]
    fn splits(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(split_line(line), Ok(words(expected)));
    }

    #[rstest]
    #[case::single("list --name 'open", "single quote")]
    #[case::double(r#"list --name "open"#, "double quote")]
    #[case::backslash(r"list \", "trailing backslash")]
    fn split_errors(#[case] line: &str, #[case] expected: &str) {
        let err = split_line(line).unwrap_err();
        assert!(err.contains(expected), "got: {err}");
    }

    fn test_app() -> App {
        let mut config = RosterConfig::default();
        config.seed.count = 4;
        config.seed.rng_seed = Some(2);
        App::from_config(config).unwrap()
    }

    async fn total(app: &App) -> usize {
        app.storage()
            .query(&SearchCriteria::all(), &PageRequest::default())
            .await
            .unwrap()
            .total
    }

    #[tokio::test]
    async fn mutations_persist_across_lines() {
        let mut app = test_app();
        let script = "\
add -u ev --first-name Emily --last-name Brown -e e@co.com -b 1995-02-01 --salary 5000000 -g Sales
delete 1
y
update 5 --status inactive
exit
list
";
        run(&mut app, OutputMode::Json, &mut Cursor::new(script))
            .await
            .unwrap();

        assert_eq!(total(&app).await, 4);
        assert!(app.storage().get(EmployeeId::new(1)).await.unwrap().is_none());
        let added = app.storage().get(EmployeeId::new(5)).await.unwrap().unwrap();
        assert_eq!(added.status, "Inactive");
    }

    #[tokio::test]
    async fn errors_do_not_end_the_session() {
        let mut app = test_app();
        let script = "\
show 99
bogus --flag
list --name 'unterminated
delete 2 --force
";
        run(&mut app, OutputMode::Json, &mut Cursor::new(script))
            .await
            .unwrap();

        assert_eq!(total(&app).await, 3);
    }

    #[tokio::test]
    async fn nested_shell_is_refused() {
        let mut app = test_app();
        run(&mut app, OutputMode::Json, &mut Cursor::new("shell\nquit\n"))
            .await
            .unwrap();
        assert_eq!(total(&app).await, 4);
    }
}
