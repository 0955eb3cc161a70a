use std::collections::HashMap;
use std::time::Duration;

use nadeem::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};

// ---------------------------------------------------------------------------
// In-memory identity provider
// ---------------------------------------------------------------------------

/// Stands in for the real provider: a fixed account list, a bit of
/// network latency, and nobody signed in at launch.
struct DemoGateway {
    accounts: HashMap<String, String>,
    latency: Duration,
}

impl DemoGateway {
    fn new() -> Self {
        let accounts = HashMap::from([(
            "hafiz@nadeem.app".to_string(),
            "tartil4".to_string(),
        )]);
        Self {
            accounts,
            latency: Duration::from_millis(600),
        }
    }
}

impl AuthGateway for DemoGateway {
    async fn current_session(&self) -> Result<Session, SessionQueryError> {
        tokio::time::sleep(self.latency).await;
        Ok(Session::Absent)
    }

    async fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.latency).await;
        match self.accounts.get(credentials.email()) {
            Some(password) if password == credentials.password() => {
                Ok(Identity::new("demo-1").with_email(credentials.email()))
            }
            _ => Err(AuthError::new("invalid-credential")),
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal input
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Edit(Field, String),
    Submit,
    Toggle,
    Exit(ExitLink),
    Social(SocialProvider),
    Show,
    Quit,
}

fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    Some(match word {
        "email" => Command::Edit(Field::Email, rest.to_string()),
        "password" => Command::Edit(Field::Password, rest.to_string()),
        "submit" => Command::Submit,
        "toggle" => Command::Toggle,
        "register" => Command::Exit(ExitLink::Register),
        "forgot" => Command::Exit(ExitLink::ForgotPassword),
        "google" => Command::Social(SocialProvider::Google),
        "apple" => Command::Social(SocialProvider::Apple),
        "facebook" => Command::Social(SocialProvider::Facebook),
        "show" => Command::Show,
        "quit" => Command::Quit,
        _ => return None,
    })
}

fn render(state: &FlowState) -> String {
    let mut out = format!("[{state}]");
    if let Some(form) = state.form() {
        let password = if form.secret_visible {
            form.credentials.password().to_string()
        } else {
            "*".repeat(form.credentials.password().chars().count())
        };
        out.push_str(&format!(
            " email={:?} password={password:?}",
            form.credentials.email()
        ));
        if let Some(e) = form.errors.email {
            out.push_str(&format!(" (email: {e})"));
        }
        if let Some(e) = form.errors.password {
            out.push_str(&format!(" (password: {e})"));
        }
    }
    if let Some(message) = state.failure_message() {
        out.push_str(&format!(" error={message:?}"));
    }
    out
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), NadeemError> {
    nadeem::init_tracing()?;

    let app = NadeemAppBuilder::new().build(Arc::new(DemoGateway::new()));
    eprintln!("nadeem: splash ({:?} fade-in)", app.session_config().fade_in);

    let mut screen = match app.launch().await {
        Launch::Home(session) => {
            println!("welcome back {:?}", session.identity());
            return Ok(());
        }
        Launch::Login(screen) => screen,
    };

    println!(
        "commands: email <v> | password <v> | submit | toggle \
         | register | forgot | google | apple | facebook | show | quit"
    );
    let mut states = screen.handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                match parse(&line) {
                    Some(Command::Edit(field, value)) => {
                        screen.handle.edit(field, value).await?
                    }
                    Some(Command::Submit) => screen.handle.submit().await?,
                    Some(Command::Toggle) => {
                        screen.handle.toggle_secret_visibility().await?
                    }
                    Some(Command::Exit(link)) => {
                        screen.handle.navigate_away(link).await?
                    }
                    Some(Command::Social(provider)) => {
                        screen.handle.social_sign_in(provider).await?
                    }
                    Some(Command::Show) => {
                        let state = screen.handle.snapshot().await?;
                        let json = serde_json::to_string_pretty(&state);
                        println!("{}", json.unwrap_or_default());
                    }
                    Some(Command::Quit) => break,
                    None => eprintln!("unknown command: {line}"),
                }
            }
            Ok(()) = states.changed() => {
                println!("{}", render(&states.borrow_and_update()));
            }
            Some(event) = screen.events.recv() => match event {
                LoginEvent::Notice(notice) => println!("(toast) {notice}"),
                LoginEvent::Navigate(destination) => {
                    tracing::info!(?destination, "leaving login screen");
                    println!("→ {destination:?}");
                    break;
                }
            },
        }
    }

    screen.handle.dispose().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse("email a@b.com"),
            Some(Command::Edit(Field::Email, "a@b.com".into()))
        );
        assert_eq!(
            parse("password  abc def"),
            Some(Command::Edit(Field::Password, " abc def".into()))
        );
        assert_eq!(parse("submit\n"), Some(Command::Submit));
        assert_eq!(
            parse("forgot"),
            Some(Command::Exit(ExitLink::ForgotPassword))
        );
        assert_eq!(
            parse("apple"),
            Some(Command::Social(SocialProvider::Apple))
        );
        assert_eq!(parse("dance"), None);
    }

    #[test]
    fn test_render_masks_hidden_password() {
        let mut form = Form::default();
        form.credentials = Credentials::new("a@b.com", "secret");
        let hidden = render(&FlowState::Editing { form: form.clone() });
        assert!(hidden.contains("******"));
        assert!(!hidden.contains("secret"));

        form.secret_visible = true;
        assert!(render(&FlowState::Editing { form }).contains("secret"));
    }

    #[tokio::test]
    async fn test_demo_gateway_accepts_registered_account() {
        let gateway = DemoGateway {
            latency: Duration::ZERO,
            ..DemoGateway::new()
        };

        let ok = gateway
            .sign_in(&Credentials::new("hafiz@nadeem.app", "tartil4"))
            .await;
        let bad = gateway
            .sign_in(&Credentials::new("hafiz@nadeem.app", "nope!!"))
            .await;

        assert_eq!(ok.unwrap().uid, "demo-1");
        assert_eq!(bad.unwrap_err().message(), "invalid-credential");
    }
}
