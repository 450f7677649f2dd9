use std::io::BufRead;

use anyhow::{Context as _, Result, bail};

use angebot_auth::Credentials;

use super::Context;
use crate::cli::CredentialArgs;

fn read_password(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    eprint!("{prompt}: ");
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn login_credentials(args: &CredentialArgs, input: &mut impl BufRead) -> Result<Credentials> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password(input, "Passwort")?,
    };
    Ok(Credentials::new(&args.email, password)?)
}

/// A password typed on stdin is asked for twice.
fn registration_credentials(args: &CredentialArgs, input: &mut impl BufRead) -> Result<Credentials> {
    let (password, confirmation) = match &args.password {
        Some(password) => (password.clone(), password.clone()),
        None => {
            let password = read_password(input, "Passwort")?;
            let confirmation = read_password(input, "Passwort wiederholen")?;
            (password, confirmation)
        }
    };
    Ok(Credentials::for_registration(&args.email, password, &confirmation)?)
}

pub async fn register(ctx: &Context, args: &CredentialArgs) -> Result<()> {
    let creds = registration_credentials(args, &mut std::io::stdin().lock())?;
    ctx.client().anonymous().register(&creds).await?;
    println!("Konto für {} angelegt. Jetzt mit `angebot login` anmelden.", creds.email());
    Ok(())
}

pub async fn login(ctx: &mut Context, args: &CredentialArgs) -> Result<()> {
    let creds = login_credentials(args, &mut std::io::stdin().lock())?;
    let session = ctx.client().anonymous().login(&creds).await?;
    let session = ctx.sessions.establish(session)?;
    println!("Angemeldet als {}.", session.email());
    Ok(())
}

pub fn logout(ctx: &mut Context) -> Result<()> {
    if !ctx.sessions.is_authenticated() {
        bail!("not logged in");
    }
    ctx.sessions.teardown()?;
    println!("Abgemeldet.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(password: Option<&str>) -> CredentialArgs {
        CredentialArgs {
            email: "neu@pinsel.de".into(),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn registration_asks_twice_on_stdin() {
        let mut input = Cursor::new("geheim\ngeheim\n");
        let creds = registration_credentials(&args(None), &mut input).unwrap();
        assert_eq!(creds.email(), "neu@pinsel.de");
    }

    #[test]
    fn registration_rejects_mismatched_confirmation() {
        let mut input = Cursor::new("geheim\ngeheim2\n");
        let err = registration_credentials(&args(None), &mut input).unwrap_err();
        assert!(err.to_string().contains("passwords do not match"));
    }

    #[test]
    fn registration_rejects_short_password_flag() {
        let mut input = Cursor::new("");
        let err = registration_credentials(&args(Some("abc")), &mut input).unwrap_err();
        assert!(err.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn login_reads_a_single_line() {
        let mut input = Cursor::new("x\r\n");
        assert!(login_credentials(&args(None), &mut input).is_ok());
    }
}
