// Résumé boundary: PDF text extraction + deterministic skill extraction.
// Produces a validated QueryProfile; the matching core never sees raw
// résumé data.

pub mod resume;
pub mod skills;
