//! Static placeholder data standing in for an external address-lookup service.
//!
//! Nothing here is read from or written to the database.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StateInfo {
    pub id: String,
    pub sigla: String,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CityInfo {
    pub id: String,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SampleCategory {
    pub id: i32,
    pub name: String,
    pub items: Vec<SampleMenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SampleMenuItem {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

const STATES: [(&str, &str, &str); 27] = [
    ("12", "AC", "Acre"),
    ("27", "AL", "Alagoas"),
    ("16", "AP", "Amapá"),
    ("13", "AM", "Amazonas"),
    ("29", "BA", "Bahia"),
    ("23", "CE", "Ceará"),
    ("53", "DF", "Distrito Federal"),
    ("32", "ES", "Espírito Santo"),
    ("52", "GO", "Goiás"),
    ("21", "MA", "Maranhão"),
    ("51", "MT", "Mato Grosso"),
    ("50", "MS", "Mato Grosso do Sul"),
    ("31", "MG", "Minas Gerais"),
    ("15", "PA", "Pará"),
    ("25", "PB", "Paraíba"),
    ("41", "PR", "Paraná"),
    ("26", "PE", "Pernambuco"),
    ("22", "PI", "Piauí"),
    ("33", "RJ", "Rio de Janeiro"),
    ("24", "RN", "Rio Grande do Norte"),
    ("43", "RS", "Rio Grande do Sul"),
    ("11", "RO", "Rondônia"),
    ("14", "RR", "Roraima"),
    ("42", "SC", "Santa Catarina"),
    ("35", "SP", "São Paulo"),
    ("28", "SE", "Sergipe"),
    ("17", "TO", "Tocantins"),
];

const CITIES: [(&str, &str); 3] = [("1", "São Paulo"), ("2", "Campinas"), ("3", "Santos")];

const SAMPLE_CATALOG: [(i32, &str, [(i32, &str, f64); 3]); 2] = [
    (
        1,
        "Pizzas",
        [
            (1, "Pizza Margherita", 45.90),
            (2, "Pizza Calabresa", 42.90),
            (3, "Pizza Portuguesa", 47.90),
        ],
    ),
    (
        2,
        "Bebidas",
        [
            (4, "Refrigerante 2L", 12.90),
            (5, "Suco Natural", 8.90),
            (6, "Água Mineral", 4.90),
        ],
    ),
];

pub fn states() -> Vec<StateInfo> {
    STATES
        .iter()
        .map(|(id, sigla, nome)| StateInfo {
            id: id.to_string(),
            sigla: sigla.to_string(),
            nome: nome.to_string(),
        })
        .collect()
}

/// The same three cities whatever `state` is asked for.
pub fn cities(_state: Option<&str>) -> Vec<CityInfo> {
    CITIES
        .iter()
        .map(|(id, nome)| CityInfo {
            id: id.to_string(),
            nome: nome.to_string(),
        })
        .collect()
}

pub fn sample_catalog() -> Vec<SampleCategory> {
    SAMPLE_CATALOG
        .iter()
        .map(|(id, name, items)| SampleCategory {
            id: *id,
            name: name.to_string(),
            items: items
                .iter()
                .map(|(id, name, price)| SampleMenuItem {
                    id: *id,
                    name: name.to_string(),
                    price: *price,
                })
                .collect(),
        })
        .collect()
}
