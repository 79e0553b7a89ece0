// Journal API: stateless mood analysis, the save flow backed by the entry store,
// and the derived history / trend views.

pub mod analyze;
pub mod handlers;
