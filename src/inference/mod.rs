//! # Módulo Inference — Encadeamento Para Frente
//!
//! Este módulo contém o **motor de inferência** do Jardim Lógico: o passo
//! único de encadeamento para frente que casa um fato contra a primeira
//! condição de uma regra e, em caso de sucesso, planta um novo fato ou uma
//! regra especializada — já com as raízes de justificação ligadas.
//!
//! ## Analogia: A Fotossíntese do Jardim
//!
//! Se a semeadura adiciona conhecimento, a inferência é a **fotossíntese** —
//! transforma matéria-prima (fatos e regras existentes) em brotos novos,
//! fazendo o jardim crescer organicamente a cada asserção.
//!
//! Veja [`InferenceEngine`] para o passo em detalhe.

/// Sub-módulo com o passo de encadeamento para frente.
pub mod forward;

/// Re-export do motor para acesso via `crate::inference::InferenceEngine`.
pub use forward::InferenceEngine;
