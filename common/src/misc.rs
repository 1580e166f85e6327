pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Direction of a cash-flow entry. Stored as text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Entrada,
    Saida,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entrada => "entrada",
            MovementKind::Saida => "saida",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(MovementKind::Entrada),
            "saida" => Some(MovementKind::Saida),
            _ => None,
        }
    }
}

/// Settlement state of a cash-flow entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementStatus {
    Pago,
    Pendente,
    Recebido,
}

impl MovementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementStatus::Pago => "pago",
            MovementStatus::Pendente => "pendente",
            MovementStatus::Recebido => "recebido",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pago" => Some(MovementStatus::Pago),
            "pendente" => Some(MovementStatus::Pendente),
            "recebido" => Some(MovementStatus::Recebido),
            _ => None,
        }
    }
}

/// Subscription state as persisted in `assinaturas.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    TesteGratuito,
    Premium,
    Parceiro,
    Liberado,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::TesteGratuito => "teste_gratuito",
            SubscriptionStatus::Premium => "premium",
            SubscriptionStatus::Parceiro => "parceiro",
            SubscriptionStatus::Liberado => "liberado",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "teste_gratuito" => Some(SubscriptionStatus::TesteGratuito),
            "premium" => Some(SubscriptionStatus::Premium),
            "parceiro" => Some(SubscriptionStatus::Parceiro),
            "liberado" => Some(SubscriptionStatus::Liberado),
            _ => None,
        }
    }

    /// Whether this status grants access on its own, without a trial window.
    pub fn is_paid_like(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Premium | SubscriptionStatus::Parceiro | SubscriptionStatus::Liberado
        )
    }
}
