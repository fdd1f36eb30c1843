use crate::engines::generation::history::GenerationRecord;

pub trait ProgressCallback: Send {
    fn on_generation_complete(&mut self, record: &GenerationRecord);
}

/// Prints `<generation>. <best fitness>` every `report_every` generations.
pub struct ConsoleProgressCallback {
    report_every: usize,
}

impl ConsoleProgressCallback {
    pub fn new(report_every: usize) -> Self {
        Self {
            report_every: report_every.max(1),
        }
    }

    pub fn format_line(record: &GenerationRecord) -> String {
        format!("{}. {:.4}", record.generation + 1, record.best_fitness)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_complete(&mut self, record: &GenerationRecord) {
        if record.generation % self.report_every == 0 {
            println!("{}", Self::format_line(record));
        }
    }
}

pub struct NullProgressCallback;

impl ProgressCallback for NullProgressCallback {
    fn on_generation_complete(&mut self, _record: &GenerationRecord) {}
}
