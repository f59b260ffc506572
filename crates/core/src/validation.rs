//! Form validation errors.
//!
//! Messages are shown to the guest or the admin as-is, so they are written in
//! the site's language.

use thiserror::Error;

use crate::types::{EmailError, PriceError, TimeOfDay};

/// A submitted form failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, selecione uma data e horário.")]
    MissingDateOrTime,

    #[error("Por favor, preencha seus dados de contato.")]
    MissingContact,

    #[error("E-mail inválido: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Data inválida: {0}")]
    InvalidDate(String),

    #[error("Horário inválido: {0}")]
    InvalidTime(String),

    #[error("Não é possível reservar para uma data passada.")]
    DateInPast,

    #[error("O grupo deve ter entre {min_adults} e {max_adults} adultos e até {max_children} crianças.")]
    PartySize {
        min_adults: u32,
        max_adults: u32,
        max_children: u32,
    },

    #[error("O horário {0} não está disponível para reservas.")]
    UnknownSlot(TimeOfDay),

    #[error("O horário {0} está lotado. Por favor, escolha outro horário.")]
    SlotFull(TimeOfDay),

    #[error("O restaurante está fechado neste dia.")]
    ClosedOnDay,

    #[error("O horário {0} está fora do horário de funcionamento.")]
    OutsideOpeningHours(TimeOfDay),

    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingMenuFields,

    #[error("O preço deve ser maior que zero.")]
    NonPositivePrice,

    #[error("Preço inválido: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Categoria inválida: {0}")]
    InvalidCategory(String),

    #[error("Capacidade inválida: mesas e reservas por horário devem ser pelo menos 1.")]
    InvalidCapacity,

    #[error("Horário de funcionamento inválido para {0}.")]
    InvalidHours(&'static str),

    #[error("Cor inválida: {0}. Use o formato #RRGGBB.")]
    InvalidColor(String),

    #[error("Por favor, preencha o nome do restaurante.")]
    MissingRestaurantName,
}
