use clap::Parser;

use ccm_thermal_calculator::{app, config, i18n};

/// Calculadora de carga térmica para salas de CCM (interface de terminal).
#[derive(Debug, Parser)]
#[command(name = "ccm_thermal_calculator_cli", version)]
struct Cli {
    /// Idioma da interface (auto/pt-br/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

/// Ponto de entrada. Carrega as preferências e roda a aplicação de terminal.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("Erro: {err}");
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let resolved = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&resolved);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
