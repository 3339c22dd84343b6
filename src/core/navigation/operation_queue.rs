//=========================================================================
// Operation Queue
//=========================================================================
//
// FIFO of pending push/pop operations.
//
// Operations are captured against the stack as it looks at enqueue
// time. The navigator dequeues one at a time, only while Ready.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::request::{PoppedCallback, PushedCallback};
use crate::core::screen::{ScreenData, ScreenId};

//=== Queued Operations ===================================================

/// A push waiting for its turn.
pub(crate) struct QueuedPush {
    pub id: ScreenId,
    pub data: ScreenData,
    pub template: String,
    pub on_pushed: Option<PushedCallback>,
}

/// A pop waiting for its turn. `id` is the screen expected on top.
pub(crate) struct QueuedPop {
    pub id: ScreenId,
    pub on_popped: Option<PoppedCallback>,
}

pub(crate) enum QueuedOperation {
    Push(QueuedPush),
    Pop(QueuedPop),
}

impl QueuedOperation {
    pub fn pop(id: ScreenId, on_popped: Option<PoppedCallback>) -> Self {
        Self::Pop(QueuedPop { id, on_popped })
    }
}

impl fmt::Display for QueuedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(push) => write!(f, "[Push] {} ({})", push.id, push.template),
            Self::Pop(pop) => write!(f, "[Pop] {}", pop.id),
        }
    }
}

//=== OperationQueue ======================================================

#[derive(Default)]
pub(crate) struct OperationQueue {
    queue: VecDeque<QueuedOperation>,
}

impl OperationQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends an operation to the back of the queue.
    pub fn push(&mut self, operation: QueuedOperation) {
        self.queue.push_back(operation);
    }

    /// Removes the oldest operation.
    pub fn dequeue(&mut self) -> Option<QueuedOperation> {
        self.queue.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedOperation> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn push_op(name: &str) -> QueuedOperation {
        QueuedOperation::Push(QueuedPush {
            id: ScreenId::new(name),
            data: ScreenData::new(),
            template: format!("{}Screen", name),
            on_pushed: None,
        })
    }

    #[test]
    fn operations_leave_in_fifo_order() {
        let mut queue = OperationQueue::new();
        queue.push(push_op("A"));
        queue.push(QueuedOperation::pop(ScreenId::new("A"), None));
        queue.push(push_op("B"));
        assert_eq!(queue.len(), 3);

        let order: Vec<String> = std::iter::from_fn(|| queue.dequeue())
            .map(|op| op.to_string())
            .collect();
        assert_eq!(order, vec!["[Push] A (AScreen)", "[Pop] A", "[Push] B (BScreen)"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn iter_does_not_consume() {
        let mut queue = OperationQueue::new();
        queue.push(push_op("A"));
        queue.push(push_op("B"));

        let pending: Vec<String> = queue.iter().map(ToString::to_string).collect();
        assert_eq!(pending, vec!["[Push] A (AScreen)", "[Push] B (BScreen)"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn dequeue_on_empty_queue_is_none() {
        let mut queue = OperationQueue::new();
        assert!(queue.dequeue().is_none());
    }
}
