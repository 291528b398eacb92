#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum_macros::EnumCount,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    InternalServerError,
    // Operation preparation
    OperationValidationError,
    // Arguments
    ArgumentCoercionError,
    ArgumentPreparationError,
    // Resolvers
    FieldResolutionError,
}
