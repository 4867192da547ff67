// DOM board rendering - grid construction and the single cell mutation path
use web_sys::{Document, Element};
use protocol::{PlayerNames, COLUMNS, ROWS};

use crate::board::{self, Board};
use crate::error::{ClientError, ClientResult};

pub struct BoardRenderer {
    board: Board,
    players: PlayerNames,
    /// Cell elements, indexed `[column][row]` like the board.
    cells: Vec<Vec<Element>>,
    status: Option<Element>,
}

impl BoardRenderer {
    /// Populate `container` with the empty grid and link the board stylesheet.
    ///
    /// Every column and cell carries `data-column` so that a click anywhere
    /// inside a column can be mapped back to it. Cells are appended in
    /// increasing row order; the stylesheet stacks them bottom-up.
    pub fn create(
        document: &Document,
        container: &Element,
        players: PlayerNames,
        stylesheet: &str,
        status: Option<Element>,
    ) -> ClientResult<Self> {
        link_stylesheet(document, stylesheet)?;

        let mut cells = Vec::with_capacity(COLUMNS);
        for column in 0..COLUMNS {
            let column_el = document.create_element("div")?;
            column_el.set_class_name("column");
            column_el.set_attribute("data-column", &column.to_string())?;

            let mut column_cells = Vec::with_capacity(ROWS);
            for row in 0..ROWS {
                let cell_el = document.create_element("div")?;
                cell_el.set_class_name("cell empty");
                cell_el.set_attribute("data-column", &column.to_string())?;
                cell_el.set_attribute("data-row", &row.to_string())?;
                column_el.append_child(&cell_el)?;
                column_cells.push(cell_el);
            }

            container.append_child(&column_el)?;
            cells.push(column_cells);
        }

        Ok(Self {
            board: Board::new(),
            players,
            cells,
            status,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fill one cell with a player's piece.
    ///
    /// Fails without touching the DOM if the player is unknown, the position
    /// is off the board or the cell is already filled. If the DOM refuses the
    /// class swap the board model is left as it was.
    pub fn play_move(&mut self, player: &str, column: i64, row: i64, moves: u64) -> ClientResult<()> {
        let seat = board::resolve_player(&self.players, player)?;
        let (column, row) = self.board.vacant(column, row)?;

        // The model is only committed once the cell shows the piece.
        let cell_el = &self.cells[column][row];
        if !cell_el.class_list().replace("empty", self.players.name(seat))? {
            return Err(ClientError::Js(format!(
                "cell at column {}, row {} has no \"empty\" class",
                column, row
            )));
        }
        self.board.place(seat, column as i64, row as i64)?;

        if let Some(status) = &self.status {
            status.set_text_content(Some(&move_status(moves, player, column)));
        }
        Ok(())
    }
}

/// Status line shown after a move. Columns are numbered from 1 for people.
pub fn move_status(moves: u64, player: &str, column: usize) -> String {
    format!("Move {}: {} played column {}", moves, player, column + 1)
}

fn link_stylesheet(document: &Document, href: &str) -> ClientResult<()> {
    let head = document
        .head()
        .ok_or_else(|| ClientError::MissingElement("head".to_string()))?;
    let link = document.create_element("link")?;
    link.set_attribute("rel", "stylesheet")?;
    link.set_attribute("href", href)?;
    head.append_child(&link)?;
    Ok(())
}
