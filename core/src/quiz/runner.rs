use std::{future, io::Write, time::Duration};

use super::{answer::AnswerReader, outcome::*};
use crate::problem::{Problem, ProblemSet};
use crate::style;

#[derive(Debug, Clone)]
pub struct QuizRunner<R> {
    reader: R,
    time_limit: Duration,
}

impl<R: AnswerReader> QuizRunner<R> {
    pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(3);

    pub fn new(reader: R) -> Self {
        Self {
            reader,
            time_limit: Self::DEFAULT_TIME_LIMIT,
        }
    }

    /// Time budget per question. Zero makes every question time out unless
    /// its answer is already there.
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn get_time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn get_reader(&self) -> &R {
        &self.reader
    }

    /// Asks every problem in order and collects one outcome per problem.
    ///
    /// Prompts and timeout notices go to `out`. Problem `i + 1` is never prompted
    /// before problem `i` is settled.
    pub async fn run<W>(&self, problems: &ProblemSet, out: &mut W) -> std::io::Result<RunResult>
    where
        W: Write + ?Sized,
    {
        let mut result = RunResult::new();

        for (i, problem) in problems.iter().enumerate() {
            style::print_prompt(out, i + 1, problem)?;

            let outcome = self.ask(problem).await;
            if outcome == Outcome::TimedOut {
                style::print_timeout_notice(out)?;
            }

            log::debug!("Problem {}: {}", i + 1, outcome);
            result.record(i, outcome);
        }
        Ok(result)
    }

    /// Races a fresh answer collection against a fresh timer.
    ///
    /// The timer starts here, after the prompt, so time left over from earlier questions
    /// never carries forward. When the timer wins, the collection is abandoned rather than
    /// cancelled.
    ///
    /// An answer that arrives exactly at the deadline times out: the deadline is observed
    /// before the answer's sender gets to run. An answer delivered before that still counts,
    /// even when the deadline has passed by the time it is polled, because `timeout` polls
    /// the answer first.
    pub async fn ask(&self, problem: &Problem) -> Outcome {
        let rx = self.reader.begin_read();
        let answer = async move {
            match rx.await {
                Ok(answer) => answer,
                // The collection never started; only the timer can settle this question.
                Err(_) => future::pending().await,
            }
        };

        match tokio::time::timeout(self.time_limit, answer).await {
            Ok(answer) if problem.is_correct(&answer) => Outcome::Correct,
            Ok(_) => Outcome::Wrong,
            Err(_) => Outcome::TimedOut,
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Cursor};

    use super::*;
    use crate::quiz::{LineAnswerReader, ScriptedAnswer, ScriptedAnswerReader};
    use Outcome::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn problems(rows: &[(&str, &str)]) -> ProblemSet {
        rows.iter().map(|(q, a)| Problem::new(q, a)).collect()
    }

    fn runner(script: Vec<ScriptedAnswer>) -> QuizRunner<ScriptedAnswerReader> {
        QuizRunner::new(ScriptedAnswerReader::new(script)).time_limit(secs(3))
    }

    async fn run(
        rows: &[(&str, &str)],
        script: Vec<ScriptedAnswer>,
    ) -> (RunResult, String) {
        colored::control::set_override(false);
        let problems = problems(rows);
        let mut out = Vec::new();
        let res = runner(script).run(&problems, &mut out).await.unwrap();
        assert_eq!(res.total(), problems.len());
        (res, String::from_utf8(out).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn answer_before_deadline_is_judged_exactly() {
        let p = Problem::new("capital of France", "Paris");
        let r = runner(vec![
            ScriptedAnswer::after(secs(1), " Paris "),
            ScriptedAnswer::after(secs(1), "paris"),
            ScriptedAnswer::after(secs(2), "Paris!"),
        ]);
        assert_eq!(r.ask(&p).await, Correct);
        assert_eq!(r.ask(&p).await, Wrong);
        assert_eq!(r.ask(&p).await, Wrong);
    }

    #[tokio::test(start_paused = true)]
    async fn answer_after_deadline_times_out() {
        let p = Problem::new("2+2", "4");
        let r = runner(vec![ScriptedAnswer::after(secs(4), "4")]);
        assert_eq!(r.ask(&p).await, TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn answer_exactly_at_deadline_times_out() {
        let p = Problem::new("2+2", "4");
        let r = runner((0..20).map(|_| ScriptedAnswer::after(secs(3), "4")).collect());
        for _ in 0..20 {
            assert_eq!(r.ask(&p).await, TimedOut);
        }
    }

    #[tokio::test]
    async fn eof_makes_remaining_answers_wrong_at_once() {
        let problems = problems(&[("2+2", "4"), ("3+3", "6"), ("5+5", "10")]);
        let r = QuizRunner::new(LineAnswerReader::new(Cursor::new("4\n"))).time_limit(secs(30));

        let start = std::time::Instant::now();
        let res = r.run(&problems, &mut io::sink()).await.unwrap();

        assert_eq!(res.correct_count(), 1);
        assert_eq!(res.wrong_indices(), &[1, 2]);
        assert!(res.timed_out_indices().is_empty());
        assert!(start.elapsed() < secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_reader_waits_for_the_timer() {
        let p = Problem::new("2+2", "4");
        let r = runner(vec![ScriptedAnswer::silent(secs(1))]);

        let start = tokio::time::Instant::now();
        assert_eq!(r.ask(&p).await, TimedOut);
        assert!(start.elapsed() >= secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_limit_fires_immediately() {
        let p = Problem::new("2+2", "4");
        let r = runner(vec![ScriptedAnswer::after(secs(1), "4")]).time_limit(Duration::ZERO);
        assert_eq!(r.ask(&p).await, TimedOut);
    }

    #[tokio::test(start_paused = true)]
    async fn answered_then_expired() {
        let (res, out) = run(
            &[("2+2", "4"), ("3+3", "6")],
            vec![
                ScriptedAnswer::after(secs(1), "4"),
                ScriptedAnswer::after(secs(10), "6"),
            ],
        )
        .await;

        assert_eq!(res.correct_count(), 1);
        assert!(res.wrong_indices().is_empty());
        assert_eq!(res.timed_out_indices(), &[1]);
        assert_eq!(out, "Problem 1\t2+2 = Problem 2\t3+3 = Out of time!\n");
    }

    #[tokio::test(start_paused = true)]
    async fn timer_restarts_for_every_question() {
        // 2s per answer stays under the 3s limit even though the run takes 6s.
        let (res, _) = run(
            &[("1+1", "2"), ("2+2", "4"), ("3+3", "6")],
            vec![
                ScriptedAnswer::after(secs(2), "2"),
                ScriptedAnswer::after(secs(2), "4"),
                ScriptedAnswer::after(secs(2), "6"),
            ],
        )
        .await;
        assert_eq!(res.correct_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn late_answer_never_settles_the_next_question() {
        let (res, out) = run(
            &[("1+1", "2"), ("2+2", "4"), ("3+3", "6")],
            vec![
                ScriptedAnswer::after(secs(5), "2"),
                ScriptedAnswer::after(secs(1), "5"),
                ScriptedAnswer::after(secs(1), "6"),
            ],
        )
        .await;

        assert_eq!(res.correct_count(), 1);
        assert_eq!(res.wrong_indices(), &[1]);
        assert_eq!(res.timed_out_indices(), &[0]);
        assert_eq!(out.matches("Out of time!").count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn indices_stay_ascending() {
        let (res, _) = run(
            &[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5")],
            vec![
                ScriptedAnswer::after(secs(1), "x"),
                ScriptedAnswer::after(secs(9), "2"),
                ScriptedAnswer::after(secs(1), "y"),
                ScriptedAnswer::after(secs(1), "4"),
                ScriptedAnswer::silent(secs(1)),
            ],
        )
        .await;

        assert_eq!(res.wrong_indices(), &[0, 2]);
        assert_eq!(res.timed_out_indices(), &[1, 4]);
        assert_eq!(res.correct_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_set_prompts_nothing() {
        let (res, out) = run(&[], vec![ScriptedAnswer::after(secs(1), "4")]).await;
        assert_eq!(res, RunResult::new());
        assert!(out.is_empty());
    }
}
