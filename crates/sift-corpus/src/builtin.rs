//! Built-in per-language corpora.
//!
//! Patterns and trending topics are translated per language; the
//! modifier word banks are shared across languages (the source data set
//! keeps them untranslated, and the engine treats them as opaque
//! tokens). Year-based time modifiers are computed at corpus build time
//! so the banks always carry the current and previous year.

use chrono::{Datelike, Utc};
use sift_core::models::Corpus;

use crate::language::Language;

/// Batch variation words, appended in passes 2/3 of batch generation
/// and reused by the growth generator.
const VARIATION_WORDS: &[&str] = &[
    "guide",
    "tutorial",
    "tips",
    "tricks",
    "review",
    "comparison",
    "analysis",
    "examples",
    "solutions",
    "methods",
    "techniques",
    "strategies",
    "tools",
    "resources",
    "benefits",
    "features",
    "advantages",
    "best practices",
    "step by step",
    "complete guide",
    "ultimate guide",
    "beginner guide",
    "advanced guide",
    "professional",
    "premium",
    "free",
    "online",
    "latest",
    "new",
    "updated",
    "modern",
    "easy",
    "simple",
    "quick",
    "fast",
    "effective",
    "efficient",
    "powerful",
    "comprehensive",
    "detailed",
];

/// Non-year time modifiers; the current and previous year are prepended
/// at build time.
const TIME_MODIFIERS: &[&str] = &[
    "today",
    "now",
    "current",
    "latest",
    "recent",
    "this year",
    "updated",
];

const QUALITY_MODIFIERS: &[&str] = &[
    "best",
    "top",
    "great",
    "excellent",
    "amazing",
    "outstanding",
    "perfect",
    "ideal",
    "optimal",
    "recommended",
    "popular",
    "trending",
];

/// Growth-generator prefixes. Overlaps with the quality bank but is a
/// wider vocabulary; the two are deliberately independent.
const PREFIX_WORDS: &[&str] = &[
    "best",
    "top",
    "great",
    "excellent",
    "amazing",
    "outstanding",
    "perfect",
    "ideal",
    "optimal",
    "recommended",
    "popular",
    "trending",
    "ultimate",
    "complete",
    "comprehensive",
    "detailed",
    "advanced",
    "professional",
    "expert",
    "premium",
    "quality",
    "superior",
];

/// Growth-generator suffixes; the current and previous year are
/// prepended at build time.
const SUFFIX_WORDS: &[&str] = &[
    "today",
    "now",
    "guide",
    "tutorial",
    "tips",
    "review",
    "analysis",
    "examples",
    "solutions",
    "methods",
    "techniques",
    "strategies",
    "tools",
    "resources",
    "benefits",
    "secrets",
    "hacks",
    "mastery",
    "explained",
    "simplified",
];

/// Trending variation prefixes. The leading empty entry lets a draw
/// leave the topic unprefixed.
const VARIATION_PREFIXES: &[&str] = &[
    "",
    "latest",
    "new",
    "best",
    "top",
    "free",
    "online",
    "guide",
    "tutorial",
    "tips",
    "review",
    "comparison",
    "analysis",
    "update",
    "advanced",
    "beginner",
    "complete",
    "professional",
    "premium",
    "trending",
    "popular",
    "recommended",
    "ultimate",
    "essential",
];

/// Trending variation suffixes; years are inserted after the empty
/// entry at build time.
const VARIATION_SUFFIXES: &[&str] = &[
    "",
    "guide",
    "tips",
    "tutorial",
    "review",
    "comparison",
    "analysis",
    "examples",
    "solutions",
    "methods",
    "techniques",
    "strategies",
    "tools",
    "resources",
    "benefits",
];

const PATTERNS_EN: &[&str] = &[
    "what is {term}",
    "how to {term}",
    "how does {term} work",
    "why {term}",
    "{term} tutorial",
    "{term} for beginners",
    "{term} examples",
    "{term} meaning",
    "{term} near me",
    "{term} online",
    "{term} reviews",
    "{term} price",
    "{term} alternatives",
    "{term} vs competitors",
    "{term} benefits",
    "{term} problems",
    "best {term}",
    "learn {term}",
    "is {term} worth it",
    "{term} step by step",
];

const PATTERNS_ES: &[&str] = &[
    "que es {term}",
    "como hacer {term}",
    "como funciona {term}",
    "por que {term}",
    "{term} tutorial",
    "{term} para principiantes",
    "{term} ejemplos",
    "{term} significado",
    "{term} cerca de mi",
    "{term} opiniones",
    "{term} precio",
    "mejor {term}",
    "aprender {term}",
    "{term} paso a paso",
];

const PATTERNS_FR: &[&str] = &[
    "qu'est-ce que {term}",
    "comment faire {term}",
    "comment fonctionne {term}",
    "pourquoi {term}",
    "{term} tutoriel",
    "{term} pour debutants",
    "{term} exemples",
    "{term} signification",
    "{term} pres de chez moi",
    "{term} avis",
    "{term} prix",
    "meilleur {term}",
    "apprendre {term}",
    "{term} etape par etape",
];

const PATTERNS_DE: &[&str] = &[
    "was ist {term}",
    "wie macht man {term}",
    "wie funktioniert {term}",
    "warum {term}",
    "{term} anleitung",
    "{term} fur anfanger",
    "{term} beispiele",
    "{term} bedeutung",
    "{term} in der nahe",
    "{term} erfahrungen",
    "{term} preis",
    "bester {term}",
    "{term} lernen",
    "{term} schritt fur schritt",
];

const PATTERNS_PT: &[&str] = &[
    "o que e {term}",
    "como fazer {term}",
    "como funciona {term}",
    "por que {term}",
    "{term} tutorial",
    "{term} para iniciantes",
    "{term} exemplos",
    "{term} significado",
    "{term} perto de mim",
    "{term} avaliacoes",
    "{term} preco",
    "melhor {term}",
    "aprender {term}",
    "{term} passo a passo",
];

const PATTERNS_RU: &[&str] = &[
    "что такое {term}",
    "как сделать {term}",
    "как работает {term}",
    "почему {term}",
    "{term} руководство",
    "{term} для начинающих",
    "{term} примеры",
    "{term} значение",
    "{term} рядом со мной",
    "{term} отзывы",
    "{term} цена",
    "лучший {term}",
    "изучить {term}",
    "{term} пошагово",
];

const PATTERNS_JA: &[&str] = &[
    "{term} とは",
    "{term} やり方",
    "{term} 仕組み",
    "なぜ {term}",
    "{term} チュートリアル",
    "{term} 初心者",
    "{term} 例",
    "{term} 意味",
    "{term} 近く",
    "{term} レビュー",
    "{term} 価格",
    "おすすめ {term}",
    "{term} 学ぶ",
    "{term} 手順",
];

const PATTERNS_ZH: &[&str] = &[
    "什么是 {term}",
    "如何 {term}",
    "{term} 原理",
    "为什么 {term}",
    "{term} 教程",
    "{term} 入门",
    "{term} 例子",
    "{term} 意思",
    "{term} 附近",
    "{term} 评价",
    "{term} 价格",
    "最好的 {term}",
    "学习 {term}",
    "{term} 步骤",
];

const PATTERNS_AR: &[&str] = &[
    "ما هو {term}",
    "كيفية {term}",
    "كيف يعمل {term}",
    "لماذا {term}",
    "{term} شرح",
    "{term} للمبتدئين",
    "{term} امثلة",
    "{term} معنى",
    "{term} بالقرب مني",
    "{term} مراجعة",
    "{term} سعر",
    "افضل {term}",
    "تعلم {term}",
    "{term} خطوة بخطوة",
];

const PATTERNS_HI: &[&str] = &[
    "{term} क्या है",
    "{term} कैसे करें",
    "{term} कैसे काम करता है",
    "{term} क्यों",
    "{term} ट्यूटोरियल",
    "{term} शुरुआती गाइड",
    "{term} उदाहरण",
    "{term} का मतलब",
    "{term} मेरे पास",
    "{term} समीक्षा",
    "{term} कीमत",
    "सबसे अच्छा {term}",
    "{term} सीखें",
    "{term} चरण दर चरण",
];

const TOPICS_EN: &[&str] = &[
    "artificial intelligence",
    "climate change",
    "electric cars",
    "remote work",
    "cryptocurrency",
    "space exploration",
    "healthy recipes",
    "home workout",
    "streaming services",
    "smart home devices",
    "personal finance",
    "digital privacy",
    "renewable energy",
    "mental health",
    "travel destinations",
    "programming languages",
    "online learning",
    "sustainable fashion",
    "gaming laptops",
    "meal planning",
];

const TOPICS_ES: &[&str] = &[
    "inteligencia artificial",
    "cambio climatico",
    "coches electricos",
    "trabajo remoto",
    "criptomonedas",
    "recetas saludables",
    "ejercicio en casa",
    "finanzas personales",
    "energia renovable",
    "destinos de viaje",
];

const TOPICS_FR: &[&str] = &[
    "intelligence artificielle",
    "changement climatique",
    "voitures electriques",
    "teletravail",
    "cryptomonnaies",
    "recettes saines",
    "sport a la maison",
    "finances personnelles",
    "energie renouvelable",
    "destinations de voyage",
];

const TOPICS_DE: &[&str] = &[
    "kunstliche intelligenz",
    "klimawandel",
    "elektroautos",
    "homeoffice",
    "kryptowahrungen",
    "gesunde rezepte",
    "training zuhause",
    "private finanzen",
    "erneuerbare energie",
    "reiseziele",
];

const TOPICS_PT: &[&str] = &[
    "inteligencia artificial",
    "mudanca climatica",
    "carros eletricos",
    "trabalho remoto",
    "criptomoedas",
    "receitas saudaveis",
    "treino em casa",
    "financas pessoais",
    "energia renovavel",
    "destinos de viagem",
];

const TOPICS_RU: &[&str] = &[
    "искусственный интеллект",
    "изменение климата",
    "электромобили",
    "удаленная работа",
    "криптовалюта",
    "здоровые рецепты",
    "домашние тренировки",
    "личные финансы",
    "возобновляемая энергия",
    "направления для путешествий",
];

const TOPICS_JA: &[&str] = &[
    "人工知能",
    "気候変動",
    "電気自動車",
    "リモートワーク",
    "暗号資産",
    "健康レシピ",
    "自宅トレーニング",
    "個人資産運用",
    "再生可能エネルギー",
    "旅行先",
];

const TOPICS_ZH: &[&str] = &[
    "人工智能",
    "气候变化",
    "电动汽车",
    "远程办公",
    "加密货币",
    "健康食谱",
    "居家锻炼",
    "个人理财",
    "可再生能源",
    "旅游目的地",
];

const TOPICS_AR: &[&str] = &[
    "الذكاء الاصطناعي",
    "تغير المناخ",
    "السيارات الكهربائية",
    "العمل عن بعد",
    "العملات الرقمية",
    "وصفات صحية",
    "تمارين منزلية",
    "التمويل الشخصي",
    "الطاقة المتجددة",
    "وجهات السفر",
];

const TOPICS_HI: &[&str] = &[
    "कृत्रिम बुद्धिमत्ता",
    "जलवायु परिवर्तन",
    "इलेक्ट्रिक कारें",
    "रिमोट वर्क",
    "क्रिप्टोकरेंसी",
    "स्वस्थ व्यंजन",
    "घरेलू कसरत",
    "व्यक्तिगत वित्त",
    "नवीकरणीय ऊर्जा",
    "यात्रा स्थल",
];

fn patterns_for(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => PATTERNS_EN,
        Language::Es => PATTERNS_ES,
        Language::Fr => PATTERNS_FR,
        Language::De => PATTERNS_DE,
        Language::Pt => PATTERNS_PT,
        Language::Ru => PATTERNS_RU,
        Language::Ja => PATTERNS_JA,
        Language::Zh => PATTERNS_ZH,
        Language::Ar => PATTERNS_AR,
        Language::Hi => PATTERNS_HI,
    }
}

fn topics_for(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => TOPICS_EN,
        Language::Es => TOPICS_ES,
        Language::Fr => TOPICS_FR,
        Language::De => TOPICS_DE,
        Language::Pt => TOPICS_PT,
        Language::Ru => TOPICS_RU,
        Language::Ja => TOPICS_JA,
        Language::Zh => TOPICS_ZH,
        Language::Ar => TOPICS_AR,
        Language::Hi => TOPICS_HI,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Years prepended to time-sensitive banks: current year first, then
/// the previous year.
fn year_pair() -> [String; 2] {
    let current = Utc::now().year();
    [current.to_string(), (current - 1).to_string()]
}

/// Build the corpus for a language. Never fails; every `Language`
/// variant has a built-in bank. Callers with free-form tags go through
/// [`Language::parse_or_default`], which gives the silent English
/// fallback the engine contract requires.
pub fn corpus_for(language: Language) -> Corpus {
    let [current, previous] = year_pair();

    let mut time_modifiers = vec![current.clone(), previous.clone()];
    time_modifiers.extend(owned(TIME_MODIFIERS));

    let mut suffix_words = vec![current.clone(), previous.clone()];
    suffix_words.extend(owned(SUFFIX_WORDS));

    // Keep the leading empty entry first so an empty draw stays the
    // most common bank head, then insert the years.
    let mut variation_suffixes = vec![String::new(), current, previous];
    variation_suffixes.extend(owned(&VARIATION_SUFFIXES[1..]));

    Corpus {
        patterns: owned(patterns_for(language)),
        variation_words: owned(VARIATION_WORDS),
        time_modifiers,
        quality_modifiers: owned(QUALITY_MODIFIERS),
        prefix_words: owned(PREFIX_WORDS),
        suffix_words,
        variation_prefixes: owned(VARIATION_PREFIXES),
        variation_suffixes,
        trending_topics: owned(topics_for(language)),
    }
}
