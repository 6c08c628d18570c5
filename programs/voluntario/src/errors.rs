use anchor_lang::prelude::*;
#[error_code]
pub enum VoluntarioError {
    #[msg("El titulo es demasiado largo")]
    TitleTooLong,
    #[msg("La descripcion es demasiado larga")]
    DescriptionTooLong,
    #[msg("La URL es demasiado larga")]
    UrlTooLong,
    #[msg("La fecha, ubicacion, categoria o proveedor es demasiado largo")]
    FieldTooLong,
    #[msg("Los datos de contacto del voluntario son demasiado largos")]
    ContactTooLong,
    #[msg("El nombre, simbolo o URI del token es demasiado largo")]
    MetadataTooLong,

    #[msg("Solo la autoridad de actualizacion del programa puede inicializar el token")]
    NotUpgradeAuthority,
    #[msg("Solo el administrador del token puede gestionar roles")]
    NotTokenAdmin,
    #[msg("No tienes el rol de minter")]
    MissingMinterRole,
    #[msg("No eres el organizador del evento")]
    NotOrganizer,
    #[msg("No eres el creador")]
    NotRewardCreator,

    #[msg("No tienes suficientes tokens")]
    InsufficientBalance,
    #[msg("Allowance insuficiente para el gasto solicitado")]
    InsufficientAllowance,
    #[msg("La recompensa no esta activa")]
    RewardInactive,

    #[msg("Ya estas inscrito en este evento")]
    AlreadyRegistered,
    #[msg("La asistencia ya fue validada")]
    AlreadyApproved,

    #[msg("El evento no existe")]
    EventNotFound,
    #[msg("La recompensa no existe")]
    RewardNotFound,
    #[msg("Las cuentas entregadas no corresponden a la pagina solicitada")]
    ListAccountMismatch,

    #[msg("Numeric overflow")]
    NumericOverflow,
}
