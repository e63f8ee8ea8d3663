use std::io::{self, BufRead, Write};

use uuid::Uuid;

use ledger_core::cli::output;
use ledger_core::core::services::AccountService;
use ledger_core::ledger::common::Displayable;
use ledger_core::ledger::{AccountNumber, Ledger};
use ledger_core::payroll::Employee;
use ledger_core::storage;
use ledger_core::utils::format_cents;

const HELP_TEXT: &str = "Available commands:
  open <number> <cents>      open an account with an initial balance
  deposit <number> <cents>   deposit into an account
  withdraw <number> <cents>  withdraw from an account
  balance <number>           show an account balance
  list                       list accounts (masked numbers)
  save <path>                save the ledger as JSON
  load <path>                load a ledger from JSON
  demo                       run the guarded-account walkthrough
  help                       show this overview
  exit                       quit";

fn main() {
    ledger_core::init();

    let mut ledger = Ledger::new("default");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let words = match shell_words::split(&line) {
            Ok(words) => words,
            Err(err) => {
                output::error(format!("Could not parse command: {err}"));
                continue;
            }
        };
        let Some((command, args)) = words.split_first() else {
            continue;
        };
        match command.as_str() {
            "open" => open(&mut ledger, args),
            "deposit" => deposit(&mut ledger, args),
            "withdraw" => withdraw(&mut ledger, args),
            "balance" => balance(&ledger, args),
            "list" => list(&ledger),
            "save" => save(&ledger, args),
            "load" => load(&mut ledger, args),
            "demo" => demo(),
            "help" => println!("{HELP_TEXT}"),
            "exit" | "quit" => break,
            other => output::error(format!("Unknown command `{other}`; try `help`")),
        }
        let _ = io::stdout().flush();
    }
}

fn parse_cents(raw: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(cents) => Some(cents),
        Err(_) => {
            output::error(format!("`{raw}` is not a valid cent amount"));
            None
        }
    }
}

fn resolve(ledger: &Ledger, number: &str) -> Option<Uuid> {
    let wanted = AccountNumber::new(number);
    let found = ledger
        .accounts
        .iter()
        .find(|account| account.number == wanted)
        .map(|account| account.id);
    if found.is_none() {
        output::error(format!("No account matching `{}`", wanted.masked()));
    }
    found
}

fn open(ledger: &mut Ledger, args: &[String]) {
    let [number, cents] = args else {
        output::error("Usage: open <number> <cents>");
        return;
    };
    let Some(cents) = parse_cents(cents) else {
        return;
    };
    match AccountService::open(ledger, AccountNumber::new(number), cents) {
        Ok(id) => {
            let account = ledger.account(id).expect("account was just opened");
            output::success(format!(
                "Opened {} with balance {}",
                account.masked_number(),
                format_cents(account.balance_cents())
            ));
        }
        Err(err) => output::error(err),
    }
}

fn deposit(ledger: &mut Ledger, args: &[String]) {
    let [number, cents] = args else {
        output::error("Usage: deposit <number> <cents>");
        return;
    };
    let (Some(id), Some(cents)) = (resolve(ledger, number), parse_cents(cents)) else {
        return;
    };
    match AccountService::deposit(ledger, id, cents) {
        Ok(new_balance) => output::success(format!("New balance: {}", format_cents(new_balance))),
        Err(err) => output::error(err),
    }
}

fn withdraw(ledger: &mut Ledger, args: &[String]) {
    let [number, cents] = args else {
        output::error("Usage: withdraw <number> <cents>");
        return;
    };
    let (Some(id), Some(cents)) = (resolve(ledger, number), parse_cents(cents)) else {
        return;
    };
    match AccountService::withdraw(ledger, id, cents) {
        Ok(new_balance) => output::success(format!("New balance: {}", format_cents(new_balance))),
        Err(err) => output::error(err),
    }
}

fn balance(ledger: &Ledger, args: &[String]) {
    let [number] = args else {
        output::error("Usage: balance <number>");
        return;
    };
    let Some(id) = resolve(ledger, number) else {
        return;
    };
    match AccountService::balance(ledger, id) {
        Ok(cents) => output::info(format!("Balance: {}", format_cents(cents))),
        Err(err) => output::error(err),
    }
}

fn list(ledger: &Ledger) {
    let accounts = AccountService::list(ledger);
    if accounts.is_empty() {
        output::info("No accounts yet");
        return;
    }
    for account in accounts {
        println!("  {}", account.display_label());
    }
}

fn save(ledger: &Ledger, args: &[String]) {
    let [path] = args else {
        output::error("Usage: save <path>");
        return;
    };
    match storage::save_ledger_to_file(ledger, path.as_ref()) {
        Ok(()) => output::success(format!("Saved ledger to {path}")),
        Err(err) => output::error(err),
    }
}

fn load(ledger: &mut Ledger, args: &[String]) {
    let [path] = args else {
        output::error("Usage: load <path>");
        return;
    };
    match storage::load_ledger_from_file(path.as_ref()) {
        Ok(loaded) => {
            *ledger = loaded;
            output::success(format!("Loaded ledger from {path}"));
        }
        Err(err) => output::error(err),
    }
}

/// Walks through the guarded-account behavior end to end.
fn demo() {
    let mut ledger = Ledger::new("demo");

    output::section("Masked account numbers");
    let id = AccountService::open(&mut ledger, AccountNumber::new("125478598745214"), 5000)
        .expect("demo ledger is empty");
    let account = ledger.account(id).expect("account was just opened");
    println!("{}", account.masked_number());

    output::section("Deposits");
    match AccountService::deposit(&mut ledger, id, 50000) {
        Ok(new_balance) => println!("New balance: {}", format_cents(new_balance)),
        Err(err) => output::error(err),
    }

    output::section("Withdrawals");
    let id = AccountService::open(&mut ledger, AccountNumber::new("500023114785996"), 1000)
        .expect("demo numbers are distinct");
    match AccountService::withdraw(&mut ledger, id, 200) {
        Ok(new_balance) => println!("New balance: {}", format_cents(new_balance)),
        Err(err) => output::error(err),
    }
    if let Err(err) = AccountService::withdraw(&mut ledger, id, 2000) {
        output::error(err);
    }
    let remaining = AccountService::balance(&ledger, id).expect("account exists");
    println!("Balance unchanged: {}", format_cents(remaining));

    output::section("Payroll raises");
    let mut employee = Employee::new("Asha", 200_000);
    println!("{}", employee.display_label());
    match employee.give_raise(10.0) {
        Ok(new_salary) => println!("Salary after raise: {}", format_cents(new_salary)),
        Err(err) => output::error(err),
    }
}
