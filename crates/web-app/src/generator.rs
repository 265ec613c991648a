use std::time::Duration;

use coach_domain::{Goal, GoalError, PlanID, WorkoutPlan};
use log::{debug, info};

use crate::Settings;

#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

pub struct GlooTimer;

impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// State of the plan generator view for one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlanGenerator {
    input: String,
    plan: Option<PlanID>,
    generating: bool,
}

impl PlanGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    #[must_use]
    pub fn plan_id(&self) -> Option<PlanID> {
        self.plan
    }

    #[must_use]
    pub fn plan(&self) -> Option<&'static WorkoutPlan> {
        self.plan.map(PlanID::plan)
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.generating
    }

    /// Validates the input and marks the generation as started.
    ///
    /// Returns `Ok(None)` without touching the state while a generation is pending.
    pub fn begin(&mut self) -> Result<Option<Goal>, GoalError> {
        if self.generating {
            debug!("ignoring submission while generating");
            return Ok(None);
        }
        let goal = Goal::new(&self.input)?;
        info!("generating plan for \"{goal}\"");
        self.generating = true;
        Ok(Some(goal))
    }

    pub fn finish(&mut self, goal: &Goal) -> &'static WorkoutPlan {
        let plan_id = PlanID::select(goal.as_ref());
        self.plan = Some(plan_id);
        self.generating = false;
        plan_id.plan()
    }

    pub async fn generate(
        &mut self,
        timer: &impl Timer,
        settings: &Settings,
    ) -> Result<Option<&'static WorkoutPlan>, GoalError> {
        let Some(goal) = self.begin()? else {
            return Ok(None);
        };
        timer.sleep(settings.generation_delay()).await;
        Ok(Some(self.finish(&goal)))
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.plan = None;
    }
}
