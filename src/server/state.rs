use crate::geography::Gazetteer;

pub struct AppState {
    pub gazetteer: &'static Gazetteer,
}

impl AppState {
    pub fn new(gazetteer: &'static Gazetteer) -> Self {
        Self { gazetteer }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Gazetteer::cgiar())
    }
}
