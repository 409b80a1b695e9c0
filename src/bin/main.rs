use log::{info, warn};
use manila::config::Config;
use manila::learning::agent::QLearningAgent;
use manila::player::{Player, PlayerType, RandomAgent};
use manila::simulation::Simulation;

fn main() {
    env_logger::init();

    let config = match Config::load("manila.toml") {
        Ok(config) => config,
        Err(err) => {
            warn!("falling back to default config: {err}");
            Config::default()
        }
    };

    let mut learner = QLearningAgent::new(0, "Player1");
    learner.alpha = config.alpha;
    learner.gamma = config.gamma;
    learner.set_factor(config.factor);
    learner.set_exploration(config.epsilon, config.eps_step);
    learner.set_verbose(config.verbose);
    if let Some(seed) = config.seed {
        learner.set_seed(seed);
    }
    if config.resume {
        learner
            .load_qtable(&config.qtable_path)
            .expect("failed to load the q-table");
        info!(
            "resumed from {} with {} entries",
            config.qtable_path,
            learner.q_table().len()
        );
    }

    let players = vec![
        PlayerType::from(learner),
        PlayerType::from(RandomAgent::new(1, "Player2")),
        PlayerType::from(RandomAgent::new(2, "Player3")),
    ];
    let mut sim = Simulation::new(config.clone(), players);
    info!("training for {} epochs", config.epochs);

    for epoch in 0..config.epochs {
        sim.run_epoch(epoch);
        if (epoch + 1) % 500 == 0 {
            let PlayerType::Learning(learner) = &sim.players[0] else {
                unreachable!("seat 0 holds the learner");
            };
            let window = 1000;
            let mean_delta = learner
                .delta_q
                .iter()
                .rev()
                .take(window)
                .map(|delta| delta.abs())
                .sum::<f32>()
                / window.min(learner.delta_q.len()) as f32;
            info!(
                "epoch {:6} | entries {:7} | mean |dQ| {:.5} | epsilon {:.3} | wins {:?}",
                epoch + 1,
                learner.q_table().len(),
                mean_delta,
                learner.epsilon(),
                sim.wins,
            );
        }
    }

    for player in &sim.players {
        info!(
            "{} final money: {}",
            player.name(),
            sim.game.money_of(player.id())
        );
    }

    let PlayerType::Learning(learner) = &sim.players[0] else {
        unreachable!("seat 0 holds the learner");
    };
    learner
        .save_qtable(&config.qtable_path)
        .expect("failed to save the q-table");
    info!(
        "saved {} q-table entries to {}",
        learner.q_table().len(),
        config.qtable_path
    );
}
