/// Genre primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Movie identifiers as stored: the 16 raw bytes of a UUID.
pub type BinaryUuid = [u8; 16];
