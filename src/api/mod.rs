mod behavior;
mod click_controller;
mod closest_resolver;
mod dispatch;
mod drag_controller;
mod engine;
mod engine_config;
mod hover_controller;
mod pointer_router;
mod region_controller;

pub use behavior::{SelectionBehavior, TooltipBehavior, ZoomBehavior};
pub use engine::InteractionEngine;
pub use engine_config::{CONFIG_JSON_SCHEMA_V1, ConfigJsonContractV1, InteractionEngineConfig};
pub use pointer_router::{PointerEvent, PointerPhase};
