use crate::bounded::{BoxTask, Rc, Send, Sync};

/// A strategy for running submitted units of work.
///
/// Implementations decide where and when a task runs; callers depend only
/// on this interface. [`Inline`] runs tasks on the submitting thread, while
/// a dispatch layer might hand them to a thread pool instead.
pub trait Executor: Send + Sync {
    /// Run the given task.
    fn execute(&self, task: BoxTask);
}

/// An [`Executor`] that runs each task immediately on the calling thread.
///
/// `execute` returns only once the task has completed, and no concurrency
/// is introduced: a panic inside the task unwinds straight into the
/// caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inline;

impl Executor for Inline {
    fn execute(&self, task: BoxTask) {
        task()
    }
}

impl<E> Executor for &E
where
    E: Executor + ?Sized,
{
    fn execute(&self, task: BoxTask) {
        (**self).execute(task)
    }
}

impl<E> Executor for Box<E>
where
    E: Executor + ?Sized,
{
    fn execute(&self, task: BoxTask) {
        (**self).execute(task)
    }
}

impl<E> Executor for Rc<E>
where
    E: Executor + ?Sized,
{
    fn execute(&self, task: BoxTask) {
        (**self).execute(task)
    }
}
