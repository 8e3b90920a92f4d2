//! # Jardim Lógico — CLI
//!
//! Driver de linha de comando: carrega um arquivo de conhecimento, semeia
//! cada fato e regra na [`KnowledgeBase`] (disparando o encadeamento para
//! frente) e executa as ações pedidas, na ordem em que aparecem:
//!
//! ```bash
//! # Semeia o arquivo e imprime a KB resultante
//! cargo run -- exemplos.kb
//!
//! # Consulta e poda, na ordem dos argumentos
//! cargo run -- exemplos.kb --ask "(hasTail ?x)" --retract "(isa Fido Dog)"
//!
//! # Logs detalhados do cultivo
//! RUST_LOG=debug cargo run -- exemplos.kb
//! ```

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use jardim_logico::core::{Fact, FactOrRule, KnowledgeBase};
use jardim_logico::parser::{parse_lines, parse_statement};

fn main() -> Result<()> {
    // Logs controlados por RUST_LOG; padrão `info`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        bail!("uso: jardim-logico <arquivo.kb> [--ask \"(stmt)\"] [--retract \"(stmt)\"]");
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("falha ao ler {}", path))?;
    let items = parse_lines(&text)
        .with_context(|| format!("falha ao interpretar {}", path))?;

    let mut kb = KnowledgeBase::new();
    for item in items {
        kb.assert_item(item);
    }
    tracing::info!(
        fatos = kb.fact_count(),
        regras = kb.rule_count(),
        "jardim semeado"
    );

    // Ações na ordem dos argumentos.
    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--ask" => {
                let query_text = rest
                    .next()
                    .context("--ask exige um statement entre aspas")?;
                let query = FactOrRule::Fact(Fact::new(parse_statement(query_text)?));
                let answers = kb.ask(&query);
                if answers.is_empty() {
                    println!("ask {} → sem respostas", query_text);
                } else {
                    for answer in &answers {
                        let facts: Vec<String> = answer
                            .facts
                            .iter()
                            .filter_map(|id| kb.fact(*id))
                            .map(|f| f.statement.to_string())
                            .collect();
                        println!(
                            "ask {} → {} via {}",
                            query_text,
                            answer.bindings,
                            facts.join(", ")
                        );
                    }
                }
            }
            "--retract" => {
                let statement_text = rest
                    .next()
                    .context("--retract exige um statement entre aspas")?;
                let item = FactOrRule::Fact(Fact::new(parse_statement(statement_text)?));
                kb.retract(&item);
            }
            other => bail!("argumento desconhecido: {}", other),
        }
    }

    println!("{}", kb);
    Ok(())
}
