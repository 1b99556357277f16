//! Prompt templates sent to the model.
//!
//! The expected JSON shape is described inline; the parsed answer is still
//! checked against [`Recipe`](super::Recipe) before it reaches a client.

use chrono::{Datelike, NaiveDate};
use std::fmt;

const RECIPE_SCHEMA: &str = r#"{
  "yemekAdi": "Yemeğin Adı",
  "aciklama": "Kısa, iştah açıcı bir açıklama",
  "sure": "Hazırlama süresi (örn: 45 dk)",
  "kalori": "Tahmini kalori (örn: 350 kcal)",
  "malzemeler": ["malzeme1", "malzeme2"],
  "tarif": ["Adım 1: ...", "Adım 2: ..."],
  "image_prompt": "[Yemeğin Tam Türkçe Adı] nefis yemek sunumu"
}"#;

const JSON_ONLY: &str = "Cevabı SADECE aşağıdaki JSON formatında döndür, başka hiçbir metin ekleme:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_date(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Winter => "kış",
            Self::Spring => "ilkbahar",
            Self::Summer => "yaz",
            Self::Autumn => "sonbahar",
        };
        f.write_str(name)
    }
}

pub fn menu_prompt(season: Season) -> String {
    format!(
        "Şu anki mevsim {season}. Bu mevsime uygun, Türk mutfağından popüler ve birbirini \
         tamamlayan 3 aşamalı bir akşam yemeği menüsü oluştur: 1) Çorba, 2) Ana Yemek, 3) Tatlı. \
         {JSON_ONLY}\n{{\n  \"menu\": [\n    {course},\n    {course},\n    {course}\n  ]\n}}",
        course = RECIPE_SCHEMA.replace('\n', "\n    "),
    )
}

pub fn ingredients_prompt(ingredients: &str, category: &str, diet_info: &str) -> String {
    format!(
        "Sen profesyonel bir şefsin. Elimdeki malzemeler: {ingredients}. \
         İstediğim kategori: {category}. \
         {constraints}\
         Bu malzemelerle (ve varsa kısıtlamalara uyarak) yapılabilecek en iyi ve yaratıcı Türk \
         mutfağı tarifini oluştur. Eğer kısıtlamalar yüzünden bu malzemeler kullanılamıyorsa, \
         uygun alternatifler önererek tarifi oluştur. \
         {JSON_ONLY}\n{RECIPE_SCHEMA}",
        constraints = constraints_line(diet_info),
    )
}

pub fn dish_prompt(dish_name: &str, diet_info: &str) -> String {
    format!(
        "Sen profesyonel bir şefsin. Kullanıcı '{dish_name}' yapmak istiyor. \
         {constraints}\
         Bu yemek için (varsa kısıtlamalara uyarak) en orijinal ve lezzetli tarifi oluştur. \
         Örneğin kullanıcı 'Lahmacun' istediyse ama kısıtlamada 'Vegan' varsa, \
         'Vegan Lahmacun (Mercimekli)' tarifi ver ve yemek adına gerekirse Vegan/Glutensiz \
         ibaresini ekle. Kısıtlama yoksa orijinal tarifi ver. \
         {JSON_ONLY}\n{RECIPE_SCHEMA}",
        constraints = constraints_line(diet_info),
    )
}

fn constraints_line(diet_info: &str) -> String {
    let diet_info = diet_info.trim();
    if diet_info.is_empty() {
        String::new()
    } else {
        format!("DİKKAT EDİLMESİ GEREKEN KISITLAMALAR: {diet_info}. ")
    }
}
