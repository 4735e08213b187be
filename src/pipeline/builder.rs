use super::orchestrator::ReportGenerator;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use proplens_charts::{ChartRenderer, SvgChartRenderer};
use proplens_executor::ExecutorImpl;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a [`ReportGenerator`].
#[derive(Default)]
pub struct ReportGeneratorBuilder {
    config: GeneratorConfig,
    chart_renderer: Option<Arc<dyn ChartRenderer>>,
    executor: Option<ExecutorImpl>,
}

impl ReportGeneratorBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the generator configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, GenerationError> {
        self.config = GeneratorConfig::load(path)?;
        Ok(self)
    }

    /// Replaces the chart backend. The default rasterizes SVG scenes with
    /// fonts chosen by the configuration.
    pub fn with_chart_renderer(mut self, renderer: Arc<dyn ChartRenderer>) -> Self {
        self.chart_renderer = Some(renderer);
        self
    }

    /// Overrides the executor picked from `parallelCharts`.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Validates the configuration and builds the generator.
    pub fn build(self) -> Result<ReportGenerator, GenerationError> {
        self.config.validate()?;
        Ok(self.assemble())
    }

    pub(super) fn assemble(self) -> ReportGenerator {
        let config = self.config;
        let chart_renderer = self.chart_renderer.unwrap_or_else(|| {
            Arc::new(SvgChartRenderer::with_fonts(config.system_fonts, &config.font_dirs))
        });
        let executor = self
            .executor
            .unwrap_or_else(|| ExecutorImpl::for_parallelism(config.parallel_charts));
        log::debug!("Report generator ready (max {} pages)", config.max_pages);

        ReportGenerator {
            config,
            chart_renderer,
            executor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proplens_executor::{Executor, SyncExecutor};

    #[test]
    fn build_rejects_invalid_config() {
        let config = GeneratorConfig {
            max_pages: 0,
            ..Default::default()
        };
        let result = ReportGeneratorBuilder::new().with_config(config).build();
        assert!(matches!(result, Err(GenerationError::Config(_))));
    }

    #[test]
    fn explicit_executor_wins_over_config() {
        let generator = ReportGeneratorBuilder::new()
            .with_chart_renderer(Arc::new(SvgChartRenderer::without_fonts()))
            .with_executor(ExecutorImpl::Sync(SyncExecutor::new()))
            .build()
            .unwrap();
        assert_eq!(generator.executor.parallelism(), 1);
        assert_eq!(generator.config().max_pages, 200);
    }
}
