//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos fundamentais** do Jardim Lógico:
//!
//! - [`Term`] / [`Statement`] — o átomo lógico (`(isa Fido Dog)`)
//! - [`Bindings`] — substituições de variáveis produzidas pela unificação
//! - [`Fact`] — um statement cultivado na KB, com histórico de sustentação
//! - [`Rule`] — uma implicação com condições ordenadas e conclusão única
//! - [`KnowledgeBase`] — o contêiner central, dono do grafo de sustentação
//!
//! ## Analogia com o Mundo Real
//!
//! Pense na [`KnowledgeBase`] como um **jardim**:
//! - Cada [`Fact`] é uma **planta** — semeada à mão ou brotada por inferência
//! - `supported_by` são as **raízes** — as derivações que a sustentam
//! - Retratar uma premissa é **podar**: tudo que perder as raízes cai junto

/// Sub-módulo com [`Term`] e [`Statement`] — o átomo lógico.
pub mod term;

/// Sub-módulo com [`Binding`], [`Bindings`] e [`AskResult`].
pub mod bindings;

/// Sub-módulo com [`Fact`], [`FactId`] e [`Support`].
pub mod fact;

/// Sub-módulo com [`Rule`] e [`RuleId`].
pub mod rule;

/// Sub-módulo com a implementação de [`KnowledgeBase`] — contêiner central.
pub mod knowledge_base;

// Re-exports para conveniência — permite usar `crate::core::Fact` diretamente.
pub use bindings::{AskResult, Binding, Bindings};
pub use fact::{Fact, FactId, Support};
pub use knowledge_base::{FactOrRule, KnowledgeBase};
pub use rule::{Rule, RuleId};
pub use term::{Statement, Term};
