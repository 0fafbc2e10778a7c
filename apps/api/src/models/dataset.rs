use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "idUsuarios")]
    pub id: i64,
    #[serde(alias = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(alias = "idRestaurante")]
    pub id: i64,
    #[serde(alias = "nome", default)]
    pub name: String,
    #[serde(alias = "tipo_restaurante")]
    pub category: String,
    #[serde(alias = "preco_medio")]
    pub average_price: f64,
}

/// A single score given by a user to a restaurant. Raw data may hold
/// several ratings for the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(alias = "id_usuario")]
    pub user_id: i64,
    #[serde(alias = "id_restaurante")]
    pub restaurant_id: i64,
    #[serde(alias = "nota")]
    pub score: f64,
}

/// Fully materialized input for one recommendation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(alias = "Usuarios", default)]
    pub users: Vec<User>,
    #[serde(alias = "Restaurante", default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(alias = "Avaliacao", default)]
    pub ratings: Vec<Rating>,
}

impl Dataset {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn find_user(&self, user_id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }
}
