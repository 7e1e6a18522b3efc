//! The Salty Maiden tavern. Every room here is indoors, so the outdoor
//! clause tables stay empty and the indoor ambience tables carry the weather.

use crate::description::bands::IndoorAmbience;
use crate::description::kind::RoomKind;
use crate::description::profile::{DescriptionProfile, PeriodTable};
use crate::time_period::TimePeriod;

pub static MAIN_ROOM: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::TavernMain,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "Early light creeps through the tavern's windows and lays long shadows \
             across the floorboards. The bar along the left wall is still being wiped \
             down, and the three booths at the back sit empty and dim.",
        ),
        (
            TimePeriod::Morning,
            "Morning sun streams through the windows and warms the tavern's \
             well-scrubbed tables. The long bar on the left wall gleams in the light, \
             and a few early patrons nurse mugs of tea in the booths at the back.",
        ),
        (
            TimePeriod::Noon,
            "The midday sun pours straight through the windows, filling the tavern with \
             hard, bright light. The bar on the left wall is crowded with dockhands on \
             their break, while the booths at the back offer shade from the heat.",
        ),
        (
            TimePeriod::Afternoon,
            "Afternoon light slants through the windows and catches the dust above the \
             tables. The bar on the left wall does a steady trade, and the booths at the \
             back hold quiet conversations.",
        ),
        (
            TimePeriod::EarlyEvening,
            "The fading daylight fills the tavern with a warm, golden glow. Patrons are \
             arriving by twos and threes, claiming stools along the bar and the booths \
             at the back.",
        ),
        (
            TimePeriod::Evening,
            "Lanterns fill the tavern with a warm and welcoming light as night settles \
             outside. Every stool along the bar is taken and laughter spills from the \
             booths at the back.",
        ),
        (
            TimePeriod::LateNight,
            "The tavern is lit by lanterns turned low and the occasional flicker from \
             the hearth. A few stubborn regulars linger at the bar while the barkeep \
             stacks chairs on the empty tables.",
        ),
        (
            TimePeriod::WitchingHour,
            "Only a single lantern still burns behind the bar, and the tavern's tables \
             stand in shadow. The booths at the back are dark and the room smells of \
             spilled ale and cold ashes.",
        ),
    ]),
    temperature: &[],
    quiet_at_night: false,
    wind: &[],
    weather: &[],
    indoor: &[
        (
            IndoorAmbience::Storm,
            "Now and then a flash of lightning through the windows lights the room in \
             brief, dramatic bursts.",
        ),
        (
            IndoorAmbience::Rain,
            "Rain patters against the windows, making the room feel all the cozier.",
        ),
        (
            IndoorAmbience::Hot,
            "A warm breeze drifts through the open windows, carrying the mingled smells \
             of the sea and the street.",
        ),
        (
            IndoorAmbience::Cold,
            "A fire crackles in the great stone hearth on the south wall, and patrons \
             edge their chairs toward it.",
        ),
        (
            IndoorAmbience::Calm,
            "A gentle breeze drifts through the open windows.",
        ),
    ],
    closing: "Sturdy wooden stairs in the northeast corner climb to the second floor, \
              their steps worn smooth by countless travelers, and the heavy door in the \
              southwest corner opens onto the street.",
};

pub static HALLWAY: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::TavernHallway,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "Faint early light reaches into the upstairs hallway, where the brass \
             sconces are still lit against the gloom. The wildflowers on the table at the \
             end of the hall are just beginning to show their colors.",
        ),
        (
            TimePeriod::Morning,
            "Morning light brightens the upstairs hallway. The brass sconces have been \
             snuffed for the day, and the fresh wildflowers on the table at the end of \
             the hall are bright in the natural light.",
        ),
        (
            TimePeriod::Noon,
            "Midday light fills the upstairs hallway, and the clay pot of wildflowers on \
             the polished table at the far end glows with color.",
        ),
        (
            TimePeriod::Afternoon,
            "The upstairs hallway is calm in the afternoon light. The wildflowers on the \
             table at the end of the hall look rich and warm, and the brass sconces wait \
             along the walls for evening.",
        ),
        (
            TimePeriod::EarlyEvening,
            "The brass sconces have just been lit and cast a warm glow along the upstairs \
             hallway. The wildflowers on the table at the end of the hall soften in the \
             dimming light.",
        ),
        (
            TimePeriod::Evening,
            "Brass sconces light the upstairs hallway warmly for the evening, their glow \
             reflected in the polish of the table at the end of the hall.",
        ),
        (
            TimePeriod::LateNight,
            "The upstairs hallway rests in a comfortable quiet, lit by the steady glow of \
             the brass sconces. The flowers on the table at the far end are barely \
             visible.",
        ),
        (
            TimePeriod::WitchingHour,
            "At this hour the brass sconces give just enough light to find the way along \
             the silent upstairs hallway, and the flowers on the table at the end scent \
             the still air.",
        ),
    ]),
    temperature: &[],
    quiet_at_night: false,
    wind: &[],
    weather: &[],
    indoor: &[
        (
            IndoorAmbience::Storm,
            "Distant thunder rumbles through the walls of the building.",
        ),
        (
            IndoorAmbience::Rain,
            "The soft drumming of rain on the roof makes the hallway feel peaceful.",
        ),
    ],
    closing: "Guest rooms One and Two open off the south side of the corridor and rooms \
              Three and Four off the north, while the stairs lead back down to the \
              common room.",
};

pub static GUEST_SOUTH: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::TavernGuestSouth,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "Early light floods this guest room through its wide south-facing window and \
             turns the wooden furniture gold. A neatly made bed stands against one wall, \
             and the desk beneath the window looks out over a harbor just coming to life.",
        ),
        (
            TimePeriod::Morning,
            "Bright morning sun pours through the south-facing window of this \
             comfortable guest room. The bed is crisply made, and the desk and chair \
             beneath the window give a fine view of the morning traffic in the harbor.",
        ),
        (
            TimePeriod::Noon,
            "From the wide south-facing window of this guest room the harbor water \
             sparkles under the midday sun. The room feels open and airy, its neatly \
             made bed and sturdy desk bathed in light.",
        ),
        (
            TimePeriod::Afternoon,
            "Softer afternoon light enters through the south-facing window, and the \
             harbor below has grown calmer after the day's peak. The neatly made bed \
             invites an afternoon rest.",
        ),
        (
            TimePeriod::EarlyEvening,
            "The sinking sun tints the harbor amber beyond the south-facing window, and \
             the first sconce has been lit beside the neatly made bed. The desk beneath \
             the window is placed just right for watching the boats come home.",
        ),
        (
            TimePeriod::Evening,
            "Brass sconces fill the guest room with warm light, and the south-facing \
             window reflects the lanterns of the harbor at night. The neatly made bed \
             beckons, and the desk invites a letter or two.",
        ),
        (
            TimePeriod::LateNight,
            "Night settles over this south-facing room. The harbor's lights glimmer \
             beyond the window while the sconces burn low over the neatly made bed and \
             sturdy desk.",
        ),
        (
            TimePeriod::WitchingHour,
            "The room is peaceful at this hour. Beyond the south-facing window the harbor \
             sleeps under the stars, and a single sconce glows over the bed and desk.",
        ),
    ]),
    temperature: &[],
    quiet_at_night: false,
    wind: &[],
    weather: &[],
    indoor: &[
        (
            IndoorAmbience::Storm,
            "The shutters rattle against the storm but hold firm, and lightning now and \
             then shows the harbor beyond the glass.",
        ),
        (
            IndoorAmbience::Rain,
            "Rain streams down the window in shifting trails, blurring the harbor view \
             into something soft and restful.",
        ),
        (
            IndoorAmbience::Hot,
            "A warm breeze slips through the half-open window, stirring the light \
             curtains and bringing the smell of salt water.",
        ),
        (
            IndoorAmbience::Cold,
            "A small brazier in the corner keeps the chill of the harbor at bay.",
        ),
    ],
    closing: "A copper bathing tub stands in one corner, waiting for hot water to be \
              carried up from the kitchens below.",
};

pub static GUEST_NORTH: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::TavernGuestNorth,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "The first hints of dawn brighten this cozy guest room, where a neatly made \
             bed rests against one wall. The brass sconces still flicker beside the \
             window, yielding slowly to the growing day.",
        ),
        (
            TimePeriod::Morning,
            "Gentle morning light filters in through the window, shaded by the \
             neighboring rooftops. The bed is crisply made and the desk beneath the \
             window is a quiet place to start the day.",
        ),
        (
            TimePeriod::Noon,
            "Midday light falls across the town's rooftops and into this cozy guest \
             room, warming the wooden furniture. The neatly made bed and the desk beneath \
             the window are comfortable and bright.",
        ),
        (
            TimePeriod::Afternoon,
            "The afternoon sun throws long shadows across the rooftops outside and \
             patterns the floor of this cozy guest room. The neatly made bed is perfect \
             for an afternoon rest.",
        ),
        (
            TimePeriod::EarlyEvening,
            "The rooftops outside glow copper in the last of the daylight, and the first \
             sconce has been lit inside. The neatly made bed and the desk beneath the \
             window wait for the evening.",
        ),
        (
            TimePeriod::Evening,
            "Evening fills the room with warm light from the sconces and from the lit \
             windows of the town beyond the glass. The desk and chair make a fine perch \
             for watching the town's nightlife.",
        ),
        (
            TimePeriod::LateNight,
            "Night brings a gentle hush to this room. The town's last lights shine softly \
             through the window, and the sconces glow warmly over the neatly made bed.",
        ),
        (
            TimePeriod::WitchingHour,
            "The room rests quietly in the early hours. Only a few of the town's lights \
             still show through the window, and the sconces give just enough light to \
             move about.",
        ),
    ]),
    temperature: &[],
    quiet_at_night: false,
    wind: &[],
    weather: &[],
    indoor: &[
        (
            IndoorAmbience::Storm,
            "The shutters are barred against the storm, though thunder still rattles \
             the panes and lightning flickers at their edges.",
        ),
        (
            IndoorAmbience::Rain,
            "Rain runs down the windowpane and turns the view of the rooftops into a \
             shimmering blur.",
        ),
        (
            IndoorAmbience::Hot,
            "A warm breeze finds its way through the half-open window, carrying the \
             smells of the town below.",
        ),
        (
            IndoorAmbience::Cold,
            "A small brazier in the corner wards off the chill that seeps in from the \
             street.",
        ),
    ],
    closing: "A copper bathing tub stands in one corner, promising a hot soak after a \
              day spent in town.",
};

pub static BOOTH: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::TavernBooth,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "Early light seeps into this private booth from the main room, mixing with \
             the glow of a small lantern still burning on the solid oak table.",
        ),
        (
            TimePeriod::Morning,
            "Daylight spills past the high-backed benches of this private booth, and the \
             solid oak table stands ready for a morning meeting or a quiet breakfast.",
        ),
        (
            TimePeriod::Noon,
            "The midday bustle of the tavern reaches the booth only as a murmur. Light \
             from the common room falls across the solid oak table, while the \
             high-backed benches keep the space cool and shaded.",
        ),
        (
            TimePeriod::Afternoon,
            "Afternoon light filters indirectly into the booth, and the solid oak table \
             gleams softly between its high-backed benches.",
        ),
        (
            TimePeriod::EarlyEvening,
            "The booth's lantern has just been lit as the tavern fills for the evening, \
             and its glow warms the solid oak table and the high-backed benches.",
        ),
        (
            TimePeriod::Evening,
            "The booth's lantern casts a warm, inviting glow over the solid oak table, \
             and the high-backed benches make the space feel like a room of its own.",
        ),
        (
            TimePeriod::LateNight,
            "The booth is a quiet retreat from the tavern's late crowd. The lantern on \
             the solid oak table gives just enough light for a private conversation.",
        ),
        (
            TimePeriod::WitchingHour,
            "The booth sits quiet at this hour, its lantern burning low over the solid \
             oak table.",
        ),
    ]),
    temperature: &[],
    quiet_at_night: false,
    wind: &[],
    weather: &[],
    indoor: &[
        (
            IndoorAmbience::Storm,
            "The storm outside is muffled here, and the distant thunder makes the booth \
             feel all the safer.",
        ),
        (
            IndoorAmbience::Rain,
            "The patter of rain beyond the walls adds a soothing undertone to the \
             booth.",
        ),
    ],
    closing: "The high-backed benches give real privacy while still letting the sounds \
              and smells of the tavern drift in.",
};

pub static KITCHEN: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::TavernKitchen,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "The kitchen is already busy. Bread dough rises in wooden bowls while the \
             hearth fire is stoked for the first batch of baking, and the smell of \
             herbs and coffee fills the air.",
        ),
        (
            TimePeriod::Morning,
            "The kitchen is in full swing. Fresh loaves cool on racks, porridge simmers \
             over the fire and the staff weave around one another filling breakfast \
             orders.",
        ),
        (
            TimePeriod::Noon,
            "Pots bubble on the hearth and knives rattle on the boards as the kitchen \
             staff work through the midday rush.",
        ),
        (
            TimePeriod::Afternoon,
            "A lull settles over the kitchen between meals. Vegetables are peeled for \
             supper while a pot of stew simmers slowly over the coals.",
        ),
        (
            TimePeriod::EarlyEvening,
            "The kitchen hums as supper service begins. Savory smells fill the air and \
             the hearth blazes under half a dozen pans at once.",
        ),
        (
            TimePeriod::Evening,
            "The kitchen runs at full tilt. Orders come in from the common room faster \
             than they can be called out, and the cooks move with quick, practiced \
             precision.",
        ),
        (
            TimePeriod::LateNight,
            "The kitchen's pace has slowed. A cook plates the last late suppers while \
             the scullions scrub the day's pots in steaming tubs.",
        ),
        (
            TimePeriod::WitchingHour,
            "Even now the kitchen is not entirely still. The night cook kneads dough for \
             the morning bread beside a hearth burned low but steady.",
        ),
    ]),
    temperature: &[],
    quiet_at_night: false,
    wind: &[],
    weather: &[],
    indoor: &[],
    closing: "A massive hearth dominates one wall, shelves and work tables line the \
              others, and a door leads back to the common room.",
};
