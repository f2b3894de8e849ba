use hourglass_rs::{SafeTimeProvider, TimeSource};
use log::debug;

use crate::config::PlannerConfig;
use crate::errors::Result;
use crate::events::{Event, EventStore};
use crate::schedule::AmortizationCalculator;
use crate::storage::PlanRepository;
use crate::types::{CalculationResult, LoanRequest, PlanId, SavedPlan};
use crate::views::{SavedPlanView, ScheduleView, SummaryView};

/// a user session: the current calculation plus the saved plans
pub struct Planner<R: PlanRepository> {
    config: PlannerConfig,
    calculator: AmortizationCalculator,
    repository: R,
    current: Option<CalculationResult>,
    events: EventStore,
}

impl<R: PlanRepository> Planner<R> {
    pub fn new(config: PlannerConfig, repository: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            calculator: AmortizationCalculator::new(&config),
            config,
            repository,
            current: None,
            events: EventStore::new(),
        })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// calculate a schedule starting today and make it the current calculation
    pub fn calculate(
        &mut self,
        request: &LoanRequest,
        time_provider: &SafeTimeProvider,
    ) -> Result<&CalculationResult> {
        let result = self.calculator.compute_schedule_now(request, time_provider)?;

        self.events.emit(Event::ScheduleCalculated {
            item_name: result.item_name.clone(),
            monthly_payment: result.monthly_payment,
            term_months: result.term_months,
        });

        let current = self.current.insert(result);
        Ok(&*current)
    }

    /// calculate with system time
    pub fn calculate_now(&mut self, request: &LoanRequest) -> Result<&CalculationResult> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.calculate(request, &time)
    }

    pub fn current(&self) -> Option<&CalculationResult> {
        self.current.as_ref()
    }

    /// drop the current calculation
    pub fn reset(&mut self) {
        if self.current.take().is_some() {
            debug!("cleared current calculation");
        }
        self.events.emit(Event::CalculationReset);
    }

    /// persist the current calculation, None when nothing has been calculated
    pub fn save_current(&mut self, time_provider: &SafeTimeProvider) -> Result<Option<SavedPlan>> {
        let Some(calculation) = self.current.clone() else {
            debug!("nothing calculated, skipping save");
            return Ok(None);
        };

        let plan = SavedPlan::new(calculation, time_provider.now());
        self.repository.append(plan.clone())?;

        self.events.emit(Event::PlanSaved {
            plan_id: plan.id,
            item_name: plan.calculation.item_name.clone(),
            timestamp: plan.saved_at,
        });

        Ok(Some(plan))
    }

    /// save with system time
    pub fn save_current_now(&mut self) -> Result<Option<SavedPlan>> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.save_current(&time)
    }

    /// delete a saved plan, returns whether it existed
    pub fn delete_plan(&mut self, id: PlanId) -> Result<bool> {
        let removed = self.repository.remove(id)?;
        if removed {
            self.events.emit(Event::PlanDeleted { plan_id: id });
        }
        Ok(removed)
    }

    pub fn plans(&self) -> Result<Vec<SavedPlan>> {
        self.repository.list_all()
    }

    pub fn summary_view(&self) -> Option<SummaryView> {
        self.current
            .as_ref()
            .map(|r| SummaryView::from_result(r, &self.config))
    }

    pub fn schedule_view(&self) -> Option<ScheduleView> {
        self.current
            .as_ref()
            .map(|r| ScheduleView::from_result(r, &self.config))
    }

    pub fn plan_views(&self) -> Result<Vec<SavedPlanView>> {
        Ok(self
            .plans()?
            .iter()
            .map(|p| SavedPlanView::from_plan(p, &self.config))
            .collect())
    }

    /// events raised since the last `take_events`. they are kept until taken, so a
    /// long-lived planner must drain them or the buffer keeps growing
    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// hand over pending events and start an empty buffer
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
