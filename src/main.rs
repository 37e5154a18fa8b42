// tacfront: C-family front end with three-address code generation

use std::io;
use std::process;

use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tacfront::cli::Cli;
use tacfront::pipeline::Compilation;
use tacfront::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let compilation = match Compilation::from_file(&cli.input, cli.equation.as_deref()) {
        Ok(compilation) => compilation,
        Err(e) => {
            eprintln!("Error: {}: {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    if cli.tui {
        return run_tui(compilation);
    }

    print_report(&cli, &compilation);
    Ok(())
}

fn print_report(cli: &Cli, run: &Compilation) {
    if cli.cleaned {
        println!("Cleaned source:");
        println!("{}", run.cleaned);
        println!();
    }

    if cli.tokens {
        println!("Tokens:");
        for token in &run.tokens {
            println!("  {}", token);
        }
        println!();
    }

    if cli.tree {
        println!("Parse tree:");
        print!("{}", run.tree);
        println!();
    }

    println!("Parsing completed successfully.");

    if let Some(tree) = &run.equation {
        println!();
        println!("Equation tree:");
        for edge in tree.edges() {
            println!("  {}", edge);
        }
    }

    println!();
    println!("Three-address code:");
    for line in run.tac_lines() {
        println!("  {}", line);
    }
}

fn run_tui(compilation: Compilation) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(compilation);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
