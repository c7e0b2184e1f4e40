// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keywords for questions that need fresh information from the web.

pub(super) const KEYWORDS: &[&str] = &[
    // News & current events
    "notícia",
    "notícias",
    "últimas notícias",
    "notícias de hoje",
    "última hora",
    "manchete",
    "manchetes",
    "jornal de hoje",
    "plantão",
    "aconteceu hoje",
    "está acontecendo",
    "acontecendo agora",
    "ao vivo",
    "em tempo real",
    "agora",
    "hoje",
    "atual",
    "atualmente",
    "recente",
    "recentes",
    "neste momento",
    // Weather
    "previsão do tempo",
    "previsão para",
    "vai chover",
    "clima hoje",
    "clima em",
    "temperatura agora",
    "temperatura em",
    "tempo em",
    // Markets & prices
    "cotação",
    "cotação do dólar",
    "dólar hoje",
    "euro hoje",
    "bolsa de valores",
    "ibovespa",
    "bitcoin hoje",
    "preço atual",
    "preço de hoje",
    "valor de mercado",
    // Sports
    "placar",
    "resultado do jogo",
    "jogo de hoje",
    "quem ganhou",
    "campeonato",
    "rodada",
    "classificação do campeonato",
    // Traffic & live logistics
    "trânsito",
    "trânsito agora",
    "estradas",
    "voo atrasado",
    "greve",
    "horário de funcionamento",
    "está aberto",
    "aberto agora",
    // Scheduled events
    "eleições",
    "apuração",
    "lançamento",
    "estreia",
    "programação do cinema",
    "agenda de shows",
];

/// Creation/explanation verbs that mention news-like nouns without needing
/// a live search ("crie uma notícia" is creative writing, not lookup).
pub(super) const NEGATIVES: &[&str] = &[
    "crie",
    "imagine",
    "invente",
    "escreva",
    "redija",
    "traduza",
    "explique",
    "defina",
    "o que é",
    "significado",
    "conceito",
    "resuma",
    "sintetize",
    "analise",
    "compare",
];
