// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keywords for deep explanation, analysis, and comparison requests.

pub(super) const KEYWORDS: &[&str] = &[
    // Explanation & understanding
    "explique",
    "explicar",
    "como funciona",
    "funcionamento",
    "mecanismo",
    "processo",
    "como acontece",
    "como ocorre",
    "de que forma",
    "elucide",
    "esclareça",
    "detalhe",
    "descreva",
    "demonstre",
    "ilustre",
    "exemplifique",
    "contextualize",
    "discorra",
    "comente",
    "fale sobre",
    "disserte",
    "resuma",
    "sintetize",
    "recapitule",
    "interprete",
    "traduza",
    "dúvida",
    "dúvidas",
    "pergunta",
    "questão",
    // Analysis & investigation
    "analise",
    "analisar",
    "avaliar",
    "avaliação",
    "examinar",
    "estudar",
    "investigar",
    "pesquisar",
    "aprofundar",
    "explorar",
    "inspecionar",
    "auditar",
    "revisar",
    "criticar",
    "julgar",
    "ponderar",
    "refletir",
    "reflexão",
    // Comparison & contrast
    "compare",
    "comparar",
    "comparação",
    "diferença",
    "diferenças",
    "semelhança",
    "contraste",
    "versus",
    "em relação a",
    "em comparação com",
    "qual a diferença",
    "distinguir",
    "diferenciar",
    "relacionar",
    "confrontar",
    "paralelo",
    "analogia",
    // Why, reason & causality
    "por que",
    "porque",
    "razão",
    "motivo",
    "causa",
    "causas",
    "qual a razão",
    "qual o motivo",
    "causalidade",
    "consequência",
    "impacto",
    "justificativa",
    "finalidade",
    "propósito",
    // Pros/cons & evaluation
    "vantagens",
    "desvantagens",
    "prós",
    "contras",
    "prós e contras",
    "pontos positivos",
    "pontos negativos",
    "benefícios",
    "malefícios",
    "pontos fortes",
    "pontos fracos",
    "custo-benefício",
    "trade-off",
    // History & context
    "história",
    "histórico",
    "origem",
    "evolução",
    "desenvolvimento",
    "cronologia",
    "linha do tempo",
    "contexto",
    "antecedentes",
    "civilização",
    "filosofia",
    "sociologia",
    "antropologia",
    // Definition & concept
    "o que é",
    "defina",
    "definição",
    "significado",
    "conceito",
    "compreender",
    "entendimento",
    "o que significa",
    "o que representa",
    "essência",
    "natureza",
    // Deep relationships
    "qual a relação",
    "como se relaciona",
    "qual a conexão",
    "qual a influência",
    "qual o impacto",
    "qual a importância",
    "por que é importante",
    "qual o papel",
    "quais as consequências",
    "quais as implicações",
    // Sciences & big ideas
    "teoria",
    "relatividade",
    "mecânica quântica",
    "termodinâmica",
    "física",
    "química",
    "biologia",
    "genética",
    "evolução das espécies",
    "ecossistema",
    "fotossíntese",
    "ética",
    "moral",
    "metafísica",
    "lógica",
    "existencialismo",
    "consciência",
    "psicologia",
    "inteligência emocional",
    "capitalismo",
    "socialismo",
    "democracia",
    "globalização",
    "sustentabilidade",
];
