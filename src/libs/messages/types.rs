#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(usize),            // task number
    TaskMarkedDone(usize),       // task number
    TaskRemoved(usize, String),  // task number, title
    DeletionCancelled,
    CreationDateToday(String),   // date
    NewTaskHeader,
    SortedByPriority,
    SortedByDeadline,
    TaskCommandFailed(String),   // error

    // === PERSISTENCE MESSAGES ===
    TasksLoaded(usize, String),  // count, path
    LoadFailed(String, String),  // path, error
    SaveFailed(String, String),  // path, error
    Goodbye,

    // === MENU ===
    MenuTitle,
    MenuAdd,
    MenuListAll,
    MenuListCompleted,
    MenuListPending,
    MenuListOverdue,
    MenuMarkDone,
    MenuDelete,
    MenuSortPriority,
    MenuSortDeadline,
    MenuExit,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),         // path
    ConfigDeleted,
    DataFileInUse(String),       // path

    // === PROMPTS ===
    PromptMenuChoice,
    PromptTitle,
    PromptDescription,
    PromptPriority,
    PromptDeadline,
    PromptTaskKind,
    PromptTaskKindNormal,
    PromptTaskKindSpecial,
    PromptNumberToMarkDone,
    PromptNumberToDelete,
    PromptConfirmDelete(String), // title
    PromptDataFile,

    // === VALIDATION ===
    NumberOutOfRange(i64, i64),  // min, max
    NumberTooSmall(i64),         // min
}
