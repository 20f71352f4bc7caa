//! Interactive console frontend for the password strength checker.

use std::error::Error;

use console::style;
use inquire::{InquireError, Password, PasswordDisplayMode};
use secrecy::SecretString;

use pwd_check::{CheckError, ZxcvbnEstimator, check_password, init_blacklist};

const ENTROPY_HELP: &str =
    "Entropy estimates how hard it is for a computer to guess your password. \
     Higher bits = stronger password.";
const SCORE_HELP: &str =
    "Strength is rated from 1 to 10 based on password complexity and estimated \
     cracking time. Higher is better.";

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", style("Password Strength Checker").bold());
    println!("{}", style(ENTROPY_HELP).dim());
    println!("{}", style(SCORE_HELP).dim());
    println!();

    // Built-in common passwords stay active when no list file is found
    let _ = init_blacklist();

    let estimator = ZxcvbnEstimator;

    loop {
        let input = match Password::new("Enter a password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };
        let password = SecretString::new(input.into());

        #[cfg(feature = "async")]
        let outcome = check_password(&estimator, &password, None);

        #[cfg(not(feature = "async"))]
        let outcome = check_password(&estimator, &password);

        match outcome {
            Ok(report) => println!("\n{}\n", report),
            Err(e @ CheckError::EmptyPassword) => {
                println!("{}\n", style(e).yellow());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
