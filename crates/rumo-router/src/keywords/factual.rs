// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keywords for single-fact lookups answerable from model knowledge.
//!
//! This category is weight-dampened by the scorer: its interrogatives
//! ("quando", "onde", "qual") are extremely common and would otherwise
//! shadow more specific intents.

pub(super) const KEYWORDS: &[&str] = &[
    // Questions (who, what, where, when)
    "quando",
    "onde",
    "quem",
    "qual",
    "quantos",
    "quantas",
    "qual é",
    "quem é",
    "onde fica",
    "quando foi",
    "quando aconteceu",
    "quando surgiu",
    "quando nasceu",
    "quando morreu",
    "em que ano",
    "em que data",
    "em que época",
    "aonde",
    "de onde",
    "com quem",
    "de quem",
    "cujo",
    "cuja",
    "quanto",
    "quanta",
    // Facts & data
    "data",
    "ano",
    "mês",
    "dia",
    "local",
    "lugar",
    "localização",
    "país",
    "cidade",
    "estado",
    "capital",
    "população",
    "habitantes",
    "área",
    "território",
    "fronteira",
    "idioma",
    "moeda",
    "nacionalidade",
    "idade",
    "altura",
    "tamanho",
    "distância",
    "duração",
    "validade",
    "origem",
    // Definitions & quick info
    "significado",
    "definição",
    "o que é",
    "o que significa",
    "conceito",
    "resumo",
    "resumidamente",
    "em poucas palavras",
    "brevemente",
    "sinopse",
    "dicionário",
    "enciclopédia",
    "wikipédia",
    "verbete",
    "citação",
    "autor",
    "fonte",
    "referência",
    // Specific information
    "informação",
    "dados",
    "estatísticas",
    "características",
    "especificações",
    "ficha técnica",
    "perfil",
    "biografia",
    "curiosidades",
    "fatos",
    // Calendar & seasons
    "natal",
    "páscoa",
    "carnaval",
    "ano novo",
    "feriado nacional",
    "primavera",
    "verão",
    "outono",
    "inverno",
    "solstício",
];

/// Creative verbs that turn a would-be lookup into generation or opinion.
pub(super) const NEGATIVES: &[&str] = &[
    "crie",
    "imagine",
    "invente",
    "sugira",
    "recomende",
    "opinião",
];
