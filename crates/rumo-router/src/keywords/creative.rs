// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keywords for generation, suggestion, and opinion requests.

pub(super) const KEYWORDS: &[&str] = &[
    // Suggestions & recommendations
    "sugira",
    "sugestão",
    "sugestões",
    "recomende",
    "recomendação",
    "recomendações",
    "indique",
    "indicação",
    "dica",
    "dicas",
    "conselho",
    "conselhos",
    "opinião",
    "o que você acha",
    "o que acha",
    "na sua opinião",
    "qual você prefere",
    "me ajude a escolher",
    "opções",
    "alternativas",
    "ideia",
    "ideias",
    "inspiração",
    "brainstorm",
    // Creation & invention
    "crie",
    "criar",
    "imagine",
    "invente",
    "inventar",
    "elabore",
    "desenvolva",
    "componha",
    "produza",
    "gere",
    "monte",
    "formule",
    "construa",
    "desenhe",
    "projete",
    "planeje",
    "improvise",
    // Writing
    "escreva",
    "escrever",
    "redija",
    "redação",
    "texto",
    "poema",
    "poesia",
    "soneto",
    "verso",
    "rima",
    "conto",
    "crônica",
    "fábula",
    "roteiro",
    "narrativa",
    "diálogo",
    "carta",
    "e-mail",
    "mensagem",
    "legenda",
    "slogan",
    "título",
    "frase",
    "piada",
    "trocadilho",
    "letra de música",
    "paródia",
    "discurso",
    "artigo",
    "post",
    // Naming
    "nome",
    "nomes",
    "nome para",
    "nomes para",
    "apelido",
    "batizar",
    "como chamar",
    // Lifestyle & taste
    "receita",
    "cardápio",
    "prato",
    "jantar romântico",
    "presente",
    "presente para",
    "look",
    "roupa para",
    "decoração",
    "decorar",
    "festa",
    "tema de festa",
    "viagem dos sonhos",
    "roteiro de viagem",
    "playlist",
    "filme para assistir",
    "série para assistir",
    "livro para ler",
    "hobby",
    "passatempo",
];
