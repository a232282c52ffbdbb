//! Run a level without a window
//!
//! Uses Bevy's `MinimalPlugins` plus logging. The particle is relaunched
//! whenever it waits at the emission point, and the run stops on a win or
//! after `frames` frames

use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::collision::Outcome;
use crate::simulation::scenario::Scenario;

#[derive(Resource, Debug, Default)]
pub struct RunStats {
    pub frame_limit: u64,
    pub frames: u64,
    pub launches: u32,
    pub resets: u32,
    pub absorptions: usize,
    pub won: bool,
}

pub fn run_headless(scenario: Scenario, frames: u64) {
    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(scenario)
        .insert_resource(RunStats {
            frame_limit: frames,
            ..Default::default()
        })
        .add_systems(Update, headless_step_system)
        .run();
}

fn headless_step_system(mut scenario: ResMut<Scenario>, mut stats: ResMut<RunStats>, mut exit: EventWriter<AppExit>) {
    if scenario.start() {
        stats.launches += 1;
    }

    let report = scenario.step_frame();
    stats.frames += 1;
    stats.absorptions += report.absorptions();

    match report.outcome {
        Some(Outcome::Won) => stats.won = true,
        Some(Outcome::Reset) => stats.resets += 1,
        None => {}
    }

    if stats.won || stats.frames >= stats.frame_limit {
        info!(
            "headless run finished: won={} frames={} launches={} resets={} absorptions={} points left={}",
            stats.won,
            stats.frames,
            stats.launches,
            stats.resets,
            stats.absorptions,
            scenario.points.len()
        );
        exit.send(AppExit::Success);
    }
}
