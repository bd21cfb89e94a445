use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use colored::*;

use gswitch::constants;
use gswitch::{
    activate, collect_emails, fix_permissions, generate_key, is_valid_email, parse_account_count,
    scan_accounts, set_identity, show_config, test_connection,
};

#[derive(Parser)]
#[command(name = constants::PROGRAM_NAME, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Print the manual
    #[arg(short = 'h', long = "help", alias = "h")]
    help: bool,
    /// Switch to GitHub Account 1 (~/.ssh/id_ed25519_account1)
    #[arg(long)]
    account1: bool,
    /// Switch to GitHub Account 2 (~/.ssh/id_ed25519_account2)
    #[arg(long)]
    account2: bool,
}

fn main() {
    print_banner();

    // Unrecognized arguments are deliberately not an error: a failed parse
    // falls through to the interactive menu, same as no arguments at all.
    if let Ok(args) = Args::try_parse() {
        if args.help {
            print_manual();
            return;
        }
        if args.account1 {
            switch_slot(1);
            return;
        }
        if args.account2 {
            switch_slot(2);
            return;
        }
    }

    if let Err(e) = run_menu() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn print_banner() {
    println!(
        " {} {}",
        constants::PROGRAM_NAME.bold().blue(),
        format!("v{}", constants::PROGRAM_VERSION).dimmed()
    );
    println!(" {}", "Multiple GitHub accounts in one CLI".dimmed());
    println!("{}", "───────────────────────".bright_black());
}

fn print_manual() {
    println!(
        "
    Generate 2 SSH Keys and rename GitHub account to
    id_ed25519_account1 and GitHub account 2 to id_ed25519_account2 in ~/.ssh

    Parameters:
    --account1          Switch to GitHub Account 1
    --account2          Switch to GitHub Account 2
"
    );
}

fn run_menu() -> anyhow::Result<()> {
    println!(
        "
Choose an option:
1. Switch GitHub Account
2. Generate SSH Key
3. Test GitHub SSH connection
4. Set GitHub account
5. Fix SSH file permissions
6. Show current GitHub config
7. Show Accounts in ~/.ssh
"
    );
    let choice = prompt("Enter your choice: ")?;
    match choice.as_str() {
        "1" => switch_account(),
        "2" => generate_keys(),
        "3" => {
            println!("Github connection testing...");
            test_connection();
            Ok(())
        }
        "4" => set_github_account(),
        "5" => fix_ssh_permissions(),
        "6" => show_github_config(),
        "7" => show_accounts(),
        _ => {
            println!("Invalid option");
            Ok(())
        }
    }
}

/// Non-interactive fixed-slot switch (`--account1` / `--account2`).
/// Best-effort by contract: a missing key file is a warning and the process
/// still exits 0 after the connectivity probe.
fn switch_slot(slot: u8) {
    let Some(ssh_dir) = constants::ssh_dir() else {
        eprintln!(
            "{} could not determine home directory",
            "warning:".yellow().bold()
        );
        return;
    };
    let src = ssh_dir.join(constants::slot_key_file_name(slot));
    let dst = ssh_dir.join(constants::DEFAULT_KEY_FILE_NAME);
    if let Err(e) = fs::copy(&src, &dst) {
        eprintln!(
            "{} could not copy {}: {}",
            "warning:".yellow().bold(),
            src.display(),
            e
        );
    }
    println!("Github Account #{} has been selected!", slot);
    test_connection();
}

fn switch_account() -> anyhow::Result<()> {
    println!("You're logged in as:");
    test_connection();

    let ssh_dir = resolve_ssh_dir()?;
    let accounts = scan_accounts(&ssh_dir)?;
    if accounts.is_empty() {
        println!("No accounts found.");
        process::exit(1);
    }

    println!("Select an email:");
    for (idx, account) in accounts.iter().enumerate() {
        println!("{}. {}", idx + 1, account.email);
    }

    let input = prompt("Enter the number of your account: ")?;
    let selected = match input.parse::<usize>() {
        Ok(n) if (1..=accounts.len()).contains(&n) => &accounts[n - 1],
        _ => {
            println!("Invalid choice. Exiting.");
            process::exit(1);
        }
    };

    println!("Github Account {} Selected!", selected.email);
    activate(&ssh_dir, &selected.file_name)?;
    test_connection();
    Ok(())
}

fn generate_keys() -> anyhow::Result<()> {
    println!(
        "Go to your GitHub Portal and add your SSH Key: {}",
        constants::SSH_SETTINGS_URL
    );

    let input = prompt("How many GitHub accounts do you want to create (0-9)? ")?;
    let Some(count) = parse_account_count(&input) else {
        println!("Invalid number. Please enter a number between 0 and 9.");
        process::exit(1);
    };

    let ssh_dir = resolve_ssh_dir()?;
    for index in 0..count {
        let email = prompt(&format!(
            "Type your GitHub email account for account #{}: ",
            index
        ))?;
        // A bad email skips this slot; later slots are still attempted.
        if !is_valid_email(&email) {
            println!("Invalid email format. Please try again.");
            continue;
        }
        if let Some(key_path) = generate_key(&ssh_dir, index, &email)? {
            println!(
                "
        +-----------------------------------------------------------+
        | SSH key generated for: {}
        | Key saved as: {}
        +-----------------------------------------------------------+
",
                email,
                key_path.display()
            );
        }
    }
    Ok(())
}

fn set_github_account() -> anyhow::Result<()> {
    let name = prompt("Enter your GitHub Account Name: ")?;
    let email = prompt("Enter your GitHub Account Email: ")?;
    set_identity(&name, &email)
}

fn fix_ssh_permissions() -> anyhow::Result<()> {
    println!("Fixing SSH file permissions...");
    let ssh_dir = resolve_ssh_dir()?;
    fix_permissions(&ssh_dir)?;
    println!(
        "
    +-----------------------------------------------------------+
    | Files permissions have been fixed
    +-----------------------------------------------------------+
"
    );
    Ok(())
}

fn show_github_config() -> anyhow::Result<()> {
    println!("Run gSwitch in git directory level");
    show_config()
}

fn show_accounts() -> anyhow::Result<()> {
    let ssh_dir = resolve_ssh_dir()?;
    for email in collect_emails(&ssh_dir)? {
        println!("-----------------------------------------");
        println!("| Email: {} |", email);
        println!("-----------------------------------------");
    }
    Ok(())
}

fn resolve_ssh_dir() -> anyhow::Result<PathBuf> {
    constants::ssh_dir().context("could not determine home directory")
}

/// Blocking stdin prompt. Returns the line with surrounding whitespace
/// trimmed.
fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
