use tracing::{debug, info, instrument};

use super::{
    options::{DeOptions, LogLevel},
    report::{EvolutionResult, GenerationReport, GenerationTrace, Reporter},
};
use crate::{
    crossover::crossover,
    error::{DeError, OptionExt, Result},
    mutation::{mutate, Mutants},
    objective::Objective,
    population::{initialize, Individual, Population},
    rng::RandomSource,
    selection::{select, SelectionOutcome},
};

/// Drives one Differential Evolution run.
///
/// The engine exclusively owns the population, its fitness vector and the random
/// source. Each call to [`Engine::step`] runs mutation, crossover and selection for the
/// whole population, in that order. Between two steps is the only point where a caller
/// may stop the run.
///
/// # Example
///
/// ```rust
/// use diffevo::evolution::{DeOptions, Engine};
///
/// let options = DeOptions::builder()
///     .population_size(20)
///     .dimension(2)
///     .bounds(-5.0, 5.0)
///     .seed(7)
///     .build();
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
///
/// let mut engine = Engine::new(options, sphere).unwrap();
/// let result = engine.run(200).unwrap();
/// assert!(result.fitness < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct Engine<O> {
    options: DeOptions,
    objective: O,
    rng: RandomSource,
    population: Population,
    fitness: Vec<f64>,
    generation: usize,
}

impl<O> Engine<O>
where
    O: Objective,
{
    /// Validates `options`, seeds the random source once and samples the initial
    /// population.
    ///
    /// # Errors
    ///
    /// - `DeError::Configuration` for invalid options.
    /// - `DeError::Resource` if the population cannot be allocated.
    /// - Any error raised by the objective while evaluating the initial population.
    pub fn new(options: DeOptions, objective: O) -> Result<Self> {
        options.validate()?;
        let mut rng = RandomSource::from_optional_seed(options.get_seed());
        let (population, fitness) = initialize(&options, &objective, &mut rng)?;

        Ok(Self {
            options,
            objective,
            rng,
            population,
            fitness,
            generation: 0,
        })
    }

    /// Runs one generation and returns a copy of the best individual.
    pub fn step(&mut self) -> Result<Individual> {
        Ok(self.step_report()?.best)
    }

    /// Runs one generation and returns its summary.
    pub fn step_report(&mut self) -> Result<GenerationReport> {
        let (_, _, outcome) = self.advance()?;
        self.report(outcome.replaced)
    }

    /// Runs one generation and returns every intermediate population it built.
    pub fn step_traced(&mut self) -> Result<GenerationTrace> {
        let parents = self.population.clone();
        let parent_fitness = self.fitness.clone();
        let (mutants, offspring, outcome) = self.advance()?;
        let report = self.report(outcome.replaced)?;

        Ok(GenerationTrace {
            report,
            parents,
            parent_fitness,
            donors: mutants.donors,
            mutants: mutants.population,
            offspring,
            offspring_fitness: outcome.offspring_fitness,
        })
    }

    /// Runs `generations` steps and returns the best individual found.
    ///
    /// Selection never worsens an index, so the best of the final population is the
    /// best seen over the whole run. `run(0)` returns the best initial individual.
    pub fn run(&mut self, generations: usize) -> Result<EvolutionResult> {
        self.run_with(generations, |_: &GenerationReport| {})
    }

    /// Like [`Engine::run`], handing every generation's report to `reporter`.
    pub fn run_with<R>(&mut self, generations: usize, mut reporter: R) -> Result<EvolutionResult>
    where
        R: Reporter,
    {
        for _ in 0..generations {
            let report = self.step_report()?;
            reporter.report(&report);
        }

        let (index, fitness) = self.best_index()?;
        Ok(EvolutionResult {
            best: self.population[index].to_vec(),
            fitness,
            generations: self.generation,
        })
    }

    #[instrument(level = "debug", skip(self), fields(generation = self.generation + 1))]
    fn advance(&mut self) -> Result<(Mutants, Population, SelectionOutcome)> {
        let mutants = mutate(
            &self.population,
            self.options.get_mutation_factor(),
            &mut self.rng,
        )?;
        let offspring = crossover(
            &self.population,
            &mutants,
            self.options.get_crossover_rate(),
            self.options.get_crossover_kind(),
            &mut self.rng,
        )?;
        let outcome = select(
            &mut self.population,
            &offspring,
            &mut self.fitness,
            &self.objective,
        )?;
        self.generation += 1;

        Ok((mutants, offspring, outcome))
    }

    fn report(&self, replaced: usize) -> Result<GenerationReport> {
        let (index, best_fitness) = self.best_index()?;
        let report = GenerationReport {
            generation: self.generation,
            best: self.population[index].to_vec(),
            best_fitness,
            replaced,
        };

        match self.options.get_log_level() {
            LogLevel::Minimal => info!(
                generation = report.generation,
                best_fitness = report.best_fitness,
                replaced = report.replaced,
                "Generation complete"
            ),
            LogLevel::Verbose => {
                info!(
                    generation = report.generation,
                    best_fitness = report.best_fitness,
                    replaced = report.replaced,
                    "Generation complete"
                );
                self.population
                    .iter()
                    .zip(self.fitness.iter())
                    .enumerate()
                    .for_each(|(index, (individual, fitness))| {
                        debug!(index, ?individual, fitness, "Individual");
                    });
            }
            LogLevel::None => {}
        }

        Ok(report)
    }

    /// Index and value of the lowest fitness; the first one wins ties.
    fn best_index(&self) -> Result<(usize, f64)> {
        self.fitness
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (index, value)| match best {
                Some((_, lowest)) if lowest <= value => best,
                _ => Some((index, value)),
            })
            .ok_or_else_de(|| DeError::EmptyPopulation)
    }

    /// Copy of the current best individual.
    pub fn best(&self) -> Result<Individual> {
        let (index, _) = self.best_index()?;
        Ok(self.population[index].to_vec())
    }

    pub fn best_fitness(&self) -> Result<f64> {
        Ok(self.best_index()?.1)
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// `fitness()[i]` is the objective value of `population()[i]`.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn options(&self) -> &DeOptions {
        &self.options
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }
}
