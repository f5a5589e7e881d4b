use crate::api::JServiceClient;
use clap::Args;
use jeopardy_core as game;
use jeopardy_protocol as protocol;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum ViewCellState {
    Pending,
    Value(game::Dollars),
    Question(AttrValue),
    Answer(AttrValue),
}

impl ViewCellState {
    fn from_clue(clue: &game::Clue, row: game::Coord) -> Self {
        use game::RevealState::*;
        match clue.state() {
            Hidden => Self::Value(game::dollar_value(row)),
            Question => Self::Question(AttrValue::from(clue.question().to_string())),
            Answer => Self::Answer(AttrValue::from(clue.answer().to_string())),
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Pending => "?".to_string(),
            Self::Value(dollars) => format!("${dollars}"),
            Self::Question(text) | Self::Answer(text) => text.to_string(),
        }
    }
}

#[derive(Debug)]
enum LoadState {
    Loading,
    Ready(game::Board),
    Failed(game::GameError),
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::RevealOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::RevealOutcome| outcome.has_update())
    }
}

pub(crate) enum Msg {
    Loaded {
        generation: u32,
        result: game::Result<game::Board>,
    },
    CellClick(game::Coord2),
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        x,
        y,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Pending => classes!("pending"),
            Value(_) => classes!("dollar-amount"),
            Question(_) => classes!("question"),
            Answer(_) => classes!("answer"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", x, y);
        callback.emit((x, y));
    });

    html! {
        <td id={format!("{x}-{y}")} {class} {onclick}>{cell_state.text()}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Number of categories, one column each
    #[arg(short = 'n', long, default_value_t = game::BoardConfig::DEFAULT_CATEGORIES)]
    pub categories: game::Coord,

    /// Number of clues per category, one row each
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_CLUES_PER_CATEGORY)]
    pub clues: game::Coord,

    /// Base URL of the clue service
    #[arg(long, default_value = protocol::DEFAULT_API_BASE)]
    pub api: String,
}

impl BoardProps {
    fn board_config(&self) -> game::BoardConfig {
        game::BoardConfig::new((self.categories, self.clues))
    }
}

#[derive(Debug)]
pub(crate) struct BoardView {
    config: game::BoardConfig,
    client: JServiceClient,
    state: LoadState,
    generation: u32,
}

impl BoardView {
    /// Throws away whatever is on screen and fetches a brand new board.
    ///
    /// Loads still in flight are not cancelled; their results carry an older generation and get dropped on arrival.
    fn start_load(&mut self, ctx: &Context<Self>) {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading;

        let generation = self.generation;
        let config = self.config;
        let client = self.client.clone();
        let link = ctx.link().clone();
        log::debug!("load #{} started for {:?}", generation, config.size);

        wasm_bindgen_futures::spawn_local(async move {
            let result = game::load_board(&client, config).await;
            link.send_message(Msg::Loaded { generation, result });
        });
    }

    fn finish_load(&mut self, generation: u32, result: game::Result<game::Board>) -> bool {
        if generation != self.generation {
            log::debug!("dropping stale load #{}", generation);
            return false;
        }

        self.state = match result {
            Ok(board) => {
                log::info!("Loading complete");
                LoadState::Ready(board)
            }
            Err(err) => {
                log::error!("failed to load board: {}", err);
                LoadState::Failed(err)
            }
        };
        true
    }

    fn reveal_cell(&mut self, coords: game::Coord2) -> bool {
        match &mut self.state {
            LoadState::Ready(board) => board.reveal(coords).has_update(),
            LoadState::Loading | LoadState::Failed(_) => false,
        }
    }

    fn get_size(&self) -> game::Coord2 {
        match &self.state {
            LoadState::Ready(board) => board.size(),
            _ => self.config.size,
        }
    }

    fn heading_at(&self, column: game::Coord) -> String {
        match &self.state {
            LoadState::Ready(board) => board
                .category(column)
                .map(game::Category::heading)
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn cell_state_at(&self, coords: game::Coord2) -> ViewCellState {
        match &self.state {
            LoadState::Ready(board) => board
                .config()
                .flat_index(coords)
                .ok()
                .and_then(|index| board.clue_at_index(index))
                .map_or(ViewCellState::Pending, |clue| {
                    ViewCellState::from_clue(clue, coords.1)
                }),
            _ => ViewCellState::Pending,
        }
    }

    fn is_locked_at(&self, coords: game::Coord2) -> bool {
        match &self.state {
            LoadState::Ready(board) => !board.can_reveal(coords),
            _ => true,
        }
    }

    fn get_state_class(&self) -> Classes {
        classes!(match &self.state {
            LoadState::Loading => "loading",
            LoadState::Ready(board) if board.is_finished() => "finished",
            LoadState::Ready(board) if board.is_locked() => "question-open",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        })
    }

    fn error_message(&self) -> Option<String> {
        match &self.state {
            LoadState::Failed(err) if err.is_remote() => {
                Some(format!("{err}. Press Restart Game to try again."))
            }
            LoadState::Failed(err) => {
                Some(format!("Could not build the board: {err}. Press Restart Game to try again."))
            }
            _ => None,
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut view = Self {
            config: props.board_config(),
            client: JServiceClient::new(props.api.clone()),
            state: LoadState::Loading,
            generation: 0,
        };
        view.start_load(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Loaded { generation, result } => self.finish_load(generation, result),
            CellClick(coords) => {
                log::debug!("reveal cell: {:?}", coords);
                self.reveal_cell(coords)
            }
            Restart => {
                log::info!("restarting game");
                self.start_load(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (cols, rows) = self.get_size();
        let state_class = self.get_state_class();
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        html! {
            <div class="jeopardy">
                <table id="board" class={state_class}>
                    <tr id="column-top">
                        {
                            for (0..cols).map(|x| html! {
                                <th id={x.to_string()}>{self.heading_at(x)}</th>
                            })
                        }
                    </tr>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (x, y);
                                        let cell_state = self.cell_state_at(pos);
                                        let locked = self.is_locked_at(pos);
                                        let callback = ctx.link().callback(Msg::CellClick);
                                        html! {
                                            <CellView {x} {y} {cell_state} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if let Some(message) = self.error_message() {
                    <p class="error" role="alert">{message}</p>
                }
                <button type="button" id="game-button" onclick={cb_restart}>{"Restart Game"}</button>
            </div>
        }
    }
}
