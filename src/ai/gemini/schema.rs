//! Declared response schema for analysis requests.
//!
//! Mirrors the subset of Gemini's OpenAPI-style `Schema` object that the
//! coaching verdict needs. The schema rides along in `generationConfig` and
//! fixes the JSON shape `AnalysisResult` later decodes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::AspectStatus;

/// Gemini schema type tag, serialized uppercase (`OBJECT`, `STRING`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Integer,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            items: None,
            enum_values: None,
            required: None,
        }
    }

    fn string(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            ..Self::new(SchemaType::String)
        }
    }

    fn string_enum(values: &[&str]) -> Self {
        Self {
            enum_values: Some(values.iter().map(|v| v.to_string()).collect()),
            ..Self::new(SchemaType::String)
        }
    }

    fn integer(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            ..Self::new(SchemaType::Integer)
        }
    }

    fn array_of(items: Schema, description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
            items: Some(Box::new(items)),
            ..Self::new(SchemaType::Array)
        }
    }

    fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        Self {
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_string(), schema))
                    .collect(),
            ),
            required: Some(required.iter().map(|r| r.to_string()).collect()),
            ..Self::new(SchemaType::Object)
        }
    }
}

/// The schema every analysis response must satisfy.
///
/// Field names and descriptions line up with `AnalysisResult`; the status
/// enum comes straight from `AspectStatus::ALL`.
pub fn analysis_schema() -> Schema {
    let status_values = AspectStatus::ALL.map(|status| status.label());

    let breakdown_item = Schema::object(
        vec![
            (
                "aspect",
                Schema::string("O aspecto técnico (ex: Toss, Postura, Impacto)."),
            ),
            ("status", Schema::string_enum(&status_values)),
            ("feedback", Schema::string("Feedback técnico específico.")),
        ],
        &["aspect", "status", "feedback"],
    );

    Schema::object(
        vec![
            (
                "overallScore",
                Schema::integer("Uma pontuação de 0 a 100 baseada na técnica demonstrada."),
            ),
            (
                "summary",
                Schema::string("Um resumo conciso da performance do jogador."),
            ),
            (
                "breakdown",
                Schema::array_of(
                    breakdown_item,
                    "Análise detalhada de partes específicas do movimento.",
                ),
            ),
            (
                "strengths",
                Schema::array_of(
                    Schema::new(SchemaType::String),
                    "Lista de 2-3 pontos fortes observados.",
                ),
            ),
            (
                "improvements",
                Schema::array_of(
                    Schema::new(SchemaType::String),
                    "Lista de 2-3 pontos a melhorar.",
                ),
            ),
            (
                "drillRecommendation",
                Schema::string("Um exercício específico recomendado para melhorar o ponto fraco principal."),
            ),
        ],
        &[
            "overallScore",
            "summary",
            "breakdown",
            "strengths",
            "improvements",
            "drillRecommendation",
        ],
    )
}
