use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_recall::core::{
    required_length, DifficultyConfig, GameSession, NullAudio, Presenter, SequenceEngine,
};
use tui_recall::store::MemoryScoreStore;

#[derive(Debug, Default)]
struct NullPresenter;

impl Presenter for NullPresenter {
    fn highlight(&mut self, _index: usize) {}
    fn unhighlight(&mut self, _index: usize) {}
    fn mark_success(&mut self, _index: usize) {}
    fn mark_error(&mut self, _index: usize) {}
    fn clear_marks(&mut self) {}
    fn set_status(&mut self, _text: &str) {}
    fn set_score(&mut self, _score: u32) {}
    fn set_level(&mut self, _level: u32) {}
    fn set_best_score(&mut self, _best: u32) {}
    fn set_controls_enabled(&mut self, _enabled: bool) {}
}

fn bench_required_length(c: &mut Criterion) {
    let config = DifficultyConfig::default();
    c.bench_function("required_length_level_20", |b| {
        b.iter(|| required_length(black_box(20), &config))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut engine = SequenceEngine::new(12345);
    c.bench_function("generate_9_tiles", |b| {
        b.iter(|| engine.generate(black_box(9)))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(
        NullPresenter,
        NullAudio,
        MemoryScoreStore::default(),
        12345,
    );
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

criterion_group!(benches, bench_required_length, bench_generate, bench_tick);
criterion_main!(benches);
