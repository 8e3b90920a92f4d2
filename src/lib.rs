//! # Jardim Lógico — Encadeamento Para Frente com Manutenção de Verdade
//!
//! Motor de inferência por **encadeamento para frente** sobre fatos e regras
//! de primeira ordem, com uma camada de **manutenção de verdade por
//! justificações**: cada item derivado registra os pares (fato, regra) que
//! o sustentam, e retratar uma premissa poda em cascata tudo que perder a
//! última justificação — preservando o que tiver justificações alternativas
//! ou tiver sido semeado diretamente.
//!
//! ## Analogia: O Jardim
//!
//! - **Semeadura** ([`KnowledgeBase::assert_item`]) planta fatos e regras
//! - **Fotossíntese** ([`inference`]) faz brotos: fatos e regras derivados
//! - **Raízes** (`supported_by`) sustentam cada broto
//! - **Poda** ([`KnowledgeBase::retract`]) corta uma premissa e deixa cair
//!   tudo que ficar sem raízes
//!
//! ## Fluxo
//!
//! ```text
//! assert_item(fato ou regra)
//!   └── KnowledgeBase::add — mescla ou insere
//!         └── para cada contraparte existente:
//!               InferenceEngine::fc_infer(fato, regra, kb)
//!                 └── casou lhs[0]?
//!                       ├── 1 condição  → novo fato  → assert de volta na KB
//!                       └── ≥2 condições → regra especializada → assert de volta
//! retract(premissa)
//!   └── poda em cascata via worklist sobre o grafo de sustentação
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use jardim_logico::core::{Fact, FactOrRule, KnowledgeBase};
//! use jardim_logico::parser::parse_line;
//!
//! let mut kb = KnowledgeBase::new();
//! kb.assert_item(parse_line("fact: (isa Fido Dog)").unwrap());
//! kb.assert_item(parse_line("rule: ((isa ?x Dog)) -> (hasTail ?x)").unwrap());
//!
//! let query = parse_line("fact: (hasTail Fido)").unwrap();
//! assert_eq!(kb.ask(&query).len(), 1);
//!
//! kb.retract(&parse_line("fact: (isa Fido Dog)").unwrap());
//! assert!(kb.ask(&query).is_empty());
//! ```

/// Módulo `core` — tipos fundamentais: Term, Fact, Rule, KnowledgeBase.
pub mod core;

/// Módulo `inference` — o passo de encadeamento para frente.
pub mod inference;

/// Módulo `parser` — sintaxe textual `fact:` / `rule:`.
pub mod parser;

/// Módulo `unify` — primitivas de casamento e instanciação.
pub mod unify;

pub use crate::core::{
    AskResult, Bindings, Fact, FactId, FactOrRule, KnowledgeBase, Rule, RuleId, Statement,
    Support, Term,
};
pub use crate::inference::InferenceEngine;
