use crate::models::{Element, QuestionKind, QuizQuestion, QUESTION_KINDS};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub const QUESTIONS_PER_RUN: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;

/// How long an answered question stays on screen before auto-advancing.
pub const ANSWER_PAUSE: Duration = Duration::from_millis(1500);

impl QuestionKind {
    pub fn question_text(&self, target: &Element) -> String {
        match self {
            QuestionKind::SymbolToName => format!(
                "What is the name of the element with symbol {}?",
                target.symbol
            ),
            QuestionKind::NameToSymbol => format!("What is the symbol for {}?", target.name),
            QuestionKind::AtomicNumber => {
                format!("What is the atomic number of {}?", target.name)
            }
        }
    }

    /// The large glyph shown on the question card.
    pub fn card_text(&self, target: &Element) -> String {
        match self {
            QuestionKind::SymbolToName => target.symbol.clone(),
            QuestionKind::NameToSymbol | QuestionKind::AtomicNumber => target.name.clone(),
        }
    }

    /// Label an answer option carries for this question kind.
    pub fn option_label(&self, option: &Element) -> String {
        match self {
            QuestionKind::SymbolToName => option.name.clone(),
            QuestionKind::NameToSymbol => option.symbol.clone(),
            QuestionKind::AtomicNumber => option.z.to_string(),
        }
    }
}

/// Build one run of questions: distinct targets, four options each (target
/// included, no duplicate atomic numbers), shuffled option order.
///
/// Precondition: `elements.len() >= OPTIONS_PER_QUESTION`, or the distractor
/// rejection loop cannot terminate.
pub fn generate_questions<'a>(
    elements: &'a [Element],
    rng: &mut impl Rng,
) -> Vec<QuizQuestion<'a>> {
    assert!(
        elements.len() >= OPTIONS_PER_QUESTION,
        "quiz generation needs at least {} elements",
        OPTIONS_PER_QUESTION
    );
    let count = QUESTIONS_PER_RUN.min(elements.len());

    let mut questions = Vec::with_capacity(count);
    let mut used_targets: HashSet<usize> = HashSet::new();

    for _ in 0..count {
        let mut target_index = rng.gen_range(0..elements.len());
        while used_targets.contains(&target_index) {
            target_index = rng.gen_range(0..elements.len());
        }
        used_targets.insert(target_index);
        let target = &elements[target_index];

        let kind = QUESTION_KINDS[rng.gen_range(0..QUESTION_KINDS.len())];

        let mut options: Vec<&Element> = vec![target];
        while options.len() < OPTIONS_PER_QUESTION {
            let candidate = &elements[rng.gen_range(0..elements.len())];
            if !options.iter().any(|o| o.z == candidate.z) {
                options.push(candidate);
            }
        }
        options.shuffle(rng);

        let correct_answer = kind.option_label(target);
        questions.push(QuizQuestion {
            kind,
            target,
            options,
            correct_answer,
        });
    }

    questions
}

/// Summary feedback tier for a finished run.
pub fn feedback(score: usize, total: usize) -> &'static str {
    let percentage = score as f64 / total as f64 * 100.0;
    if percentage >= 80.0 {
        "Chemistry Genius!"
    } else if percentage >= 60.0 {
        "Solid Performance!"
    } else if percentage < 40.0 {
        "Keep Studying!"
    } else {
        "Good effort!"
    }
}

/// A quiz in progress. Created on entering Playing, dropped on replay/exit.
#[derive(Debug)]
pub struct QuizRun<'a> {
    pub questions: Vec<QuizQuestion<'a>>,
    pub current_index: usize,
    pub score: usize,
    pub selected_answer: Option<String>,
    pub answered: bool,
    advance_at: Option<Instant>,
    finished: bool,
}

impl<'a> QuizRun<'a> {
    pub fn new(elements: &'a [Element], rng: &mut impl Rng) -> Self {
        QuizRun {
            questions: generate_questions(elements, rng),
            current_index: 0,
            score: 0,
            selected_answer: None,
            answered: false,
            advance_at: None,
            finished: false,
        }
    }

    pub fn current(&self) -> &QuizQuestion<'a> {
        &self.questions[self.current_index]
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Record an answer. The first answer is authoritative; anything after
    /// it is ignored.
    pub fn answer(&mut self, label: String, now: Instant) {
        if self.answered {
            return;
        }
        if label == self.questions[self.current_index].correct_answer {
            self.score += 1;
        }
        self.selected_answer = Some(label);
        self.answered = true;
        self.advance_at = Some(now + ANSWER_PAUSE);
    }

    /// Advance past an answered question once its pause has elapsed.
    /// Returns true when the run just finished.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = matches!(self.advance_at, Some(at) if now >= at);
        if !due {
            return false;
        }
        self.advance_at = None;
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.answered = false;
            self.selected_answer = None;
            false
        } else {
            self.finished = true;
            true
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn feedback(&self) -> &'static str {
        feedback(self.score, self.questions.len())
    }
}
