//! Headless demo: seeds a small zone portfolio, then drives a scripted
//! owner → advertiser session through the real action queue, one step per
//! frame, and prints what the collection and editor log ended up with.

use bevy::prelude::*;
use serde::Deserialize;

use admap::seed;
use admap::HostPlugin;
use engine::campaign::{format_cpm, format_reach, listing_for, ListingStatus};
use engine::editor::{EditorAction, EditorActionQueue, EditorLog};
use engine::zone::ZoneRegistry;
use engine::{EnginePlugin, UserRole};

/// One step of the scripted session: switch the acting role, or push an
/// editor action the way an interactive map surface would.
#[derive(Debug, Deserialize)]
enum DemoStep {
    SetRole(UserRole),
    Act(EditorAction),
}

/// The session: the owner draws and prices a new zone near Dubai Creek,
/// then an advertiser books a campaign on it. Zone ids 1 and 2 are the
/// seeds, so the placed zone comes out as id 3.
const DEMO_SCRIPT: &str = r#"[
    {"SetRole": "ZoneOwner"},
    {"Act": {"ArmDrawTool": {"shape": "Circle"}}},
    {"Act": {"MapClick": {"point": {"lat": 25.1972, "lng": 55.2744}}}},
    {"Act": {"Select": {"zone_id": 3}}},
    {"Act": {"Resize": {"dimension": "Radius", "meters": 120.0}}},
    {"Act": "BeginRename"},
    {"Act": {"CommitRename": {"name": "Creek Harbour Launch"}}},
    {"Act": {"RequestActivation": {"months": 3}}},
    {"SetRole": "Advertiser"},
    {"Act": {"Select": {"zone_id": 3}}},
    {"Act": "StartCampaign"}
]"#;

fn main() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::log::LogPlugin::default())
        .add_plugins((EnginePlugin, HostPlugin))
        .add_systems(Startup, seed::seed_demo_zones);

    let steps: Vec<DemoStep> = match serde_json::from_str(DEMO_SCRIPT) {
        Ok(steps) => steps,
        Err(err) => {
            error!("demo script is not valid JSON: {err}");
            return;
        }
    };

    for step in steps {
        match step {
            DemoStep::SetRole(role) => {
                *app.world_mut().resource_mut::<UserRole>() = role;
            }
            DemoStep::Act(action) => {
                app.world_mut()
                    .resource_mut::<EditorActionQueue>()
                    .push(action);
            }
        }
        app.update();
    }
    // Let trailing side effects settle.
    app.update();

    let world = app.world();
    println!("--- zones ---");
    for zone in world.resource::<ZoneRegistry>().iter() {
        let listing = match listing_for(zone) {
            ListingStatus::Active(listing) => format!(
                "{} CPM, reach {}",
                format_cpm(listing.cpm_rate),
                format_reach(listing.estimated_reach)
            ),
            ListingStatus::Inactive => "inactive".to_string(),
        };
        println!(
            "#{} {:<24} {:>8} m²  {}",
            zone.id,
            zone.name,
            zone.area_sqm(),
            listing
        );
    }
    println!("--- recent editor results ---");
    for (action, result) in world.resource::<EditorLog>().iter_recent(8) {
        println!("{action:?} -> {result:?}");
    }
}
