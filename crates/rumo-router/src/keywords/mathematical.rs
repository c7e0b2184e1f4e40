// SPDX-FileCopyrightText: 2026 Rumo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keywords for calculation, conversion, and math questions.

pub(super) const KEYWORDS: &[&str] = &[
    // Calculation & operations
    "calcule",
    "calcular",
    "conversão",
    "converter",
    "quanto é",
    "quanto dá",
    "qual o resultado",
    "resultado",
    "soma",
    "somar",
    "subtração",
    "subtrair",
    "multiplicação",
    "multiplicar",
    "divisão",
    "dividir",
    "dividido por",
    "potência",
    "elevado a",
    "raiz",
    "raiz quadrada",
    "raiz cúbica",
    "porcentagem",
    "percentual",
    "por cento",
    "logaritmo",
    "seno",
    "cosseno",
    "tangente",
    "fatorial",
    "derivada",
    "integral",
    "limite",
    "matriz",
    "vetor",
    "determinante",
    "número primo",
    "mdc",
    "mmc",
    "resto",
    "quociente",
    // Math terms & areas
    "equação",
    "fórmula",
    "cálculo",
    "matemática",
    "aritmética",
    "álgebra",
    "geometria",
    "trigonometria",
    "estatística",
    "probabilidade",
    "média",
    "mediana",
    "desvio padrão",
    "variância",
    "regra de três",
    "proporção",
    "fração",
    "decimal",
    "número",
    "números",
    "teorema",
    "função",
    "gráfico",
    "plano cartesiano",
    "polígono",
    "triângulo",
    "círculo",
    "circunferência",
    "ângulo",
    "radiano",
    "progressão aritmética",
    "progressão geométrica",
    // Financial math
    "juros simples",
    "juros compostos",
    "montante",
    "taxa de juros",
    "amortização",
    "desconto",
    "fluxo de caixa",
    // Units & measurements
    "quilômetro",
    "metro",
    "centímetro",
    "milímetro",
    "quilograma",
    "grama",
    "litro",
    "mililitro",
    "graus",
    "celsius",
    "fahrenheit",
    "polegada",
    "milha",
    "hectare",
    "converter para",
    "equivale a",
    "corresponde a",
    "transformar em",
    "passar para",
];
