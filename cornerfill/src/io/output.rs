use crate::config::CornerfillConfig;
use panelpack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct Output {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CornerfillConfig,
}
