//! # Anchors and Payloads
//!
//! The literal text each pass searches for and the blocks it puts back.

/// The file the repair was written for.
pub const DEFAULT_TARGET: &str =
    "/home/maizied/Desktop/Personal_Projects/lorapok_player/lorapok-player/src/App.tsx";

/// Line printed once the file has been written.
pub const CONFIRMATION: &str = "Final comprehensive fix applied.";

/// Attribute assignments whose value is a quoted literal or a braced template.
pub const CLASS_ATTRIBUTE_PATTERN: &str = r#"(?s)className=(["'`].*?["'`]|\{[`'"].*?[`'"]\})"#;

/// Span from the first state hook through `setShowHelp(false)`.
pub const STATE_SPAN_PATTERN: &str =
    r"(?s)const \[isCastReady, setIsCastReady\].*?setShowHelp\(false\)";

/// Hook declarations put back over [`STATE_SPAN_PATTERN`].
pub const STATE_SECTION: &str = "  const [isCastReady, setIsCastReady] = useState(false)
  const [castUrl, setCastUrl] = useState<string | null>(null)
  const [editingMetadata, setEditingMetadata] = useState<string | null>(null)
  const [mascotMood, setMascotMood] = useState<'idle' | 'happy' | 'sleeping' | 'surprised' | 'joy'>('idle')
  const [showHelp, setShowHelp] = useState(false)";

/// Opening of the debug toggle in the footer.
pub const DEBUG_BUTTON_ANCHOR: &str = "<button onClick={() => setShowDebug(!showDebug)}";

/// Settings and equalizer buttons, followed by the debug toggle opening again.
pub const FOOTER_BUTTONS: &str = r#"                      <button onClick={() => {}} className="text-white/30 hover:text-white transition-colors" title="Settings">
                        <Settings className="w-4 h-4" />
                      </button>
                      <button onClick={() => {}} className="text-white/30 hover:text-white transition-colors" title="Equalizer">
                        <Sliders className="w-4 h-4" />
                      </button>
                      <button onClick={() => setShowDebug(!showDebug)}"#;

/// Single-line icon import. Dot does not cross newlines here.
pub const ICON_IMPORT_PATTERN: &str = r"import \{.*?\} from 'lucide-react'";

/// The full icon import.
pub const ICON_IMPORT: &str = "import { Play, Pause, SkipForward, SkipBack, Maximize2, Minimize2, FolderOpen, X, Minus, Square, Info, List, Plus, Trash2, Volume2, VolumeX, Globe, Ghost, Edit, Settings, Sliders, Menu, Film, FileVideo, Music, Image as ImageIcon, Monitor, Mic, Radio } from 'lucide-react'";

/// Present in the content once the dev icon block has been inserted.
pub const DEV_ICONS_MARKER: &str = "___DEV_ICONS___";

/// Declaration the dev icon block is inserted in front of.
pub const APP_FUNCTION_ANCHOR: &str = "function App() {";

/// Keeps the not-yet-rendered icons referenced so `tsc` stays quiet.
pub const DEV_ICONS_BLOCK: &str = "
// Development Mode Icons (Phase 3 Prep)
const ___DEV_ICONS___ = { Menu, Film, FileVideo, Music, ImageIcon, Monitor, Mic, Radio };
if (process.env.NODE_ENV === 'development') console.log('Ready for Phase 3:', Object.keys(___DEV_ICONS___).length);
";
