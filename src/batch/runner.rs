//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;
use econv::error::{EconvError, Result};

use rayon::prelude::*;

/// 单条输入的处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 跳过（如空单元格）
    Skipped(usize),
    /// 处理失败
    Failed(usize, String), // (行号, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功的输出，按输入顺序
    pub outputs: Vec<T>,
    /// 跳过数量
    pub skipped: usize,
    /// 失败详情
    pub failures: Vec<(usize, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            outputs: Vec::new(),
            skipped: 0,
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(output) => self.outputs.push(output),
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(line, err) => self.failures.push((line, err)),
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.outputs.len() + self.skipped + self.failures.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理输入列表
    pub fn run<I, T, F>(&self, items: &[I], processor: F) -> Result<BatchResult<T>>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, "Converting");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| EconvError::Other(format!("Failed to start thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_keeps_order_and_counts() {
        let items: Vec<i32> = (0..50).collect();
        let runner = BatchRunner::new(4);
        let result = runner
            .run(&items, |&i| match i % 10 {
                0 => ProcessResult::Skipped(i as usize),
                7 => ProcessResult::Failed(i as usize, "bad".to_string()),
                _ => ProcessResult::Success(i * 2),
            })
            .unwrap();

        assert_eq!(result.total(), 50);
        assert_eq!(result.skipped, 5);
        assert_eq!(result.failures.len(), 5);
        assert_eq!(result.outputs[..3], [2, 4, 6]);
        assert!(result.outputs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_jobs_means_all_cpus() {
        assert_eq!(BatchRunner::new(0).jobs(), num_cpus::get());
    }
}
