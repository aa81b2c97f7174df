use crate::model::{KanbanBoard, KanbanCard};

/// Which screen is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Boards,
    Board(String), // Board id
    Calendar,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Board operations
    CreateBoard {
        title: String,
        description: Option<String>,
        color: String,
    },
    UpdateBoard(KanbanBoard),
    DeleteBoard(String),

    // Column operations
    CreateColumn {
        board_id: String,
        title: String,
    },
    DeleteColumn {
        board_id: String,
        column_id: String,
    },

    // Card operations
    CreateCard {
        board_id: String,
        column_id: String,
        title: String,
        description: Option<String>,
    },
    UpdateCard {
        board_id: String,
        card: KanbanCard,
    },
    DeleteCard {
        board_id: String,
        column_id: String,
        card_id: String,
    },
    MoveCard {
        board_id: String,
        card_id: String,
        from_column_id: String,
        to_column_id: String,
    },
    ReorderCards {
        board_id: String,
        column_id: String,
        cards: Vec<KanbanCard>,
    },

    // UI operations
    Navigate(View),
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

/// What an open text input will be used for
#[derive(Debug, Clone, PartialEq)]
pub enum InputPurpose {
    NewBoard,
    NewBoardDescription { title: String },
    EditBoardDescription { board_id: String },
    NewColumn { board_id: String },
    NewCard { board_id: String, column_id: String },
    NewCardDescription { board_id: String, column_id: String, title: String },
    EditTitle { board_id: String, card_id: String },
    EditDescription { board_id: String, card_id: String },
    EditDueDate { board_id: String, card_id: String },
}

impl InputPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            InputPurpose::NewBoard => "New board",
            InputPurpose::NewBoardDescription { .. } => "Board description (optional)",
            InputPurpose::EditBoardDescription { .. } => "Edit board description",
            InputPurpose::NewColumn { .. } => "New column",
            InputPurpose::NewCard { .. } => "New card",
            InputPurpose::NewCardDescription { .. } => "Card description (optional)",
            InputPurpose::EditTitle { .. } => "Edit card title",
            InputPurpose::EditDescription { .. } => "Edit card description",
            InputPurpose::EditDueDate { .. } => "Due date (YYYY-MM-DD, empty to clear)",
        }
    }

    /// Whether submitting an empty buffer is meaningful (clears the field)
    pub fn allows_empty(&self) -> bool {
        !matches!(
            self,
            InputPurpose::NewBoard
                | InputPurpose::NewColumn { .. }
                | InputPurpose::NewCard { .. }
                | InputPurpose::EditTitle { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Input { purpose: InputPurpose, buffer: String },
    /// Last step of board creation; `selected` indexes the board palette
    ColorPicker {
        title: String,
        description: Option<String>,
        selected: usize,
    },
    ConfirmDeleteBoard { board_id: String },
    CardDetail { board_id: String, card_id: String },
    Error(String),
    Logs,
    Help,
}
